// src/errors.rs

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load asset {path}: {message}")]
    Asset { path: PathBuf, message: String },

    #[error("Name table {table} is inconsistent: {message}")]
    NameTable { table: &'static str, message: String },

    #[error("No compatible graphics adapter found")]
    NoAdapter,

    #[error("Failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("Invalid window icon: {0}")]
    Icon(#[from] winit::window::BadIcon),

    #[error("Failed to create rendering surface: {0}")]
    CreateSurface(#[from] egui_wgpu::wgpu::CreateSurfaceError),

    #[error("Failed to acquire graphics device: {0}")]
    RequestDevice(#[from] egui_wgpu::wgpu::RequestDeviceError),

    #[error("Surface error: {0}")]
    Surface(#[from] egui_wgpu::wgpu::SurfaceError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HarnessError {
    pub fn config_error(message: impl Into<String>) -> Self {
        HarnessError::Config(message.into())
    }

    pub fn asset_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        HarnessError::Asset {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn name_table(table: &'static str, message: impl Into<String>) -> Self {
        HarnessError::NameTable {
            table,
            message: message.into(),
        }
    }
}

pub type HarnessResult<T> = Result<T, HarnessError>;

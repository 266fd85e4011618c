use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};

/// Where and how large the rendered reports are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Directory every image is written to
    pub output_dir: PathBuf,

    /// Canvas size for single-chart plots (loss curves, ROC, series)
    pub figure_size: (u32, u32),

    /// Canvas size for the grouped box plot
    pub box_plot_size: (u32, u32),

    /// Edge length of one scatter-matrix panel
    pub scatter_panel_size: u32,

    /// Create `output_dir` on demand instead of failing when it is missing
    pub create_output_dir: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            output_dir: PathBuf::from("results"),
            figure_size: (640, 480),
            box_plot_size: (1200, 600),
            scatter_panel_size: 250,
            create_output_dir: false,
        }
    }
}

impl ReportConfig {
    /// Default configuration writing into `dir`
    pub fn with_output_dir<P: Into<PathBuf>>(dir: P) -> Self {
        ReportConfig {
            output_dir: dir.into(),
            ..Self::default()
        }
    }

    /// Load a configuration from a JSON file; absent keys take their defaults
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: ReportConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn builder() -> ReportConfigBuilder {
        ReportConfigBuilder::new()
    }

    fn validate(&self) -> Result<()> {
        let sizes = [
            ("figure_size", self.figure_size),
            ("box_plot_size", self.box_plot_size),
            ("scatter_panel_size", (self.scatter_panel_size, self.scatter_panel_size)),
        ];
        for (name, (w, h)) in sizes {
            if w == 0 || h == 0 {
                return Err(ReportError::invalid_parameter(name, "dimensions must be greater than 0"));
            }
        }
        Ok(())
    }

    /// Resolve the path of an artifact, prefixing `arch_<id>_` when an
    /// architecture identifier is given. The result always stays directly
    /// inside `output_dir`.
    pub fn artifact_path(&self, base_name: &str, arch: Option<&str>) -> Result<PathBuf> {
        check_file_component("base_name", base_name)?;
        let file = match arch {
            Some(id) => {
                check_file_component("arch", id)?;
                format!("arch_{}_{}", id, base_name)
            }
            None => base_name.to_string(),
        };
        Ok(self.output_dir.join(file))
    }

    /// Make sure the output directory is usable before drawing into it
    pub(crate) fn prepare_output_dir(&self) -> Result<()> {
        if self.output_dir.is_dir() {
            return Ok(());
        }
        if self.create_output_dir {
            std::fs::create_dir_all(&self.output_dir)?;
            Ok(())
        } else {
            Err(ReportError::MissingOutputDir(self.output_dir.clone()))
        }
    }
}

/// Builder for ReportConfig
pub struct ReportConfigBuilder {
    output_dir: Option<PathBuf>,
    figure_size: Option<(u32, u32)>,
    box_plot_size: Option<(u32, u32)>,
    scatter_panel_size: Option<u32>,
    create_output_dir: bool,
}

impl ReportConfigBuilder {
    pub fn new() -> Self {
        ReportConfigBuilder {
            output_dir: None,
            figure_size: None,
            box_plot_size: None,
            scatter_panel_size: None,
            create_output_dir: false,
        }
    }

    /// Set the output directory
    pub fn output_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Set the canvas size of single-chart plots
    pub fn figure_size(mut self, width: u32, height: u32) -> Self {
        self.figure_size = Some((width, height));
        self
    }

    pub fn box_plot_size(mut self, width: u32, height: u32) -> Self {
        self.box_plot_size = Some((width, height));
        self
    }

    pub fn scatter_panel_size(mut self, size: u32) -> Self {
        self.scatter_panel_size = Some(size);
        self
    }

    /// Create the output directory if it is missing
    pub fn create_output_dir(mut self, create: bool) -> Self {
        self.create_output_dir = create;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ReportConfig> {
        let defaults = ReportConfig::default();
        let config = ReportConfig {
            output_dir: self.output_dir.unwrap_or(defaults.output_dir),
            figure_size: self.figure_size.unwrap_or(defaults.figure_size),
            box_plot_size: self.box_plot_size.unwrap_or(defaults.box_plot_size),
            scatter_panel_size: self.scatter_panel_size.unwrap_or(defaults.scatter_panel_size),
            create_output_dir: self.create_output_dir,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for ReportConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Reject values that would leave the output directory when used in a file name
pub(crate) fn check_file_component(name: &str, value: &str) -> Result<()> {
    if value.is_empty() || value.contains(['/', '\\']) || value == ".." {
        return Err(ReportError::invalid_parameter(
            name.to_string(),
            format!("'{}' cannot be used in a file name", value),
        ));
    }
    Ok(())
}

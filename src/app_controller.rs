use anyhow::{Result, Context, anyhow};
use log::{error, warn, info, debug};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::language_utils;
use crate::message::Message;

// @module: Application controller for translation file generation

/// Extension of the message files picked up when rendering a folder
pub const MESSAGES_EXTENSION: &str = "json";

/// Main application controller for translation file generation
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Render messages with the configured format, locale and target mode
    pub fn render(&self, messages: &[Message]) -> Result<String> {
        let serializer = self.config.format.serializer();
        let output = serializer
            .render_file(messages, &self.config.locale, self.config.target_only)
            .with_context(|| format!("Failed to render {}", self.config.format.display_name()))?;
        Ok(output)
    }

    /// Render one messages file into `output_dir`
    ///
    /// A configured output directory takes precedence over `output_dir`.
    /// Returns the written path, or `None` when the output already exists and
    /// `force_overwrite` is not set.
    pub fn run(&self, input_file: PathBuf, output_dir: PathBuf, force_overwrite: bool) -> Result<Option<PathBuf>> {
        let output_dir = self.config.output_dir.clone().unwrap_or(output_dir);
        self.render_into(&input_file, &output_dir, force_overwrite)
    }

    fn render_into(&self, input_file: &Path, output_dir: &Path, force_overwrite: bool) -> Result<Option<PathBuf>> {
        let start_time = Instant::now();

        if !FileManager::file_exists(input_file) {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        let output_path = FileManager::generate_output_path(
            input_file,
            output_dir,
            &self.config.locale,
            self.config.format.extension(),
        );

        if output_path.exists() && !force_overwrite {
            warn!("Skipping {:?}, output already exists (use -f to force overwrite)", output_path);
            return Ok(None);
        }

        let messages = FileManager::read_messages(input_file)?;
        debug!("Loaded {} message(s) from {:?}", messages.len(), input_file);

        let output = self.render(&messages)?;
        FileManager::write_to_file(&output_path, &output)?;

        info!(
            "Wrote {} unit(s) as {} ({}) to {:?} in {:.2?}",
            messages.len(),
            self.config.format.display_name(),
            language_utils::get_language_name(&self.config.locale).unwrap_or_else(|_| self.config.locale.clone()),
            output_path,
            start_time.elapsed()
        );

        Ok(Some(output_path))
    }

    /// Render every messages file found under `input_dir`
    ///
    /// Outputs land next to each input, or under the configured output
    /// directory at the input's path relative to `input_dir`.
    ///
    /// Failures are logged and counted; the folder run only fails when every
    /// file failed. Skipped files are not failures.
    pub fn run_folder(&self, input_dir: PathBuf, force_overwrite: bool) -> Result<Vec<PathBuf>> {
        if !FileManager::dir_exists(&input_dir) {
            return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let files = FileManager::find_files(&input_dir, MESSAGES_EXTENSION)?;
        info!("Found {} messages file(s) in {:?}", files.len(), input_dir);

        let total = files.len();
        let mut written = Vec::new();
        let mut skipped = 0;
        let mut failures = 0;
        for file in files {
            let output_dir = self.folder_output_dir(&input_dir, &file);
            match self.render_into(&file, &output_dir, force_overwrite) {
                Ok(Some(path)) => written.push(path),
                Ok(None) => skipped += 1,
                Err(e) => {
                    error!("Error processing {:?}: {:#}", file, e);
                    failures += 1;
                }
            }
        }

        if failures > 0 && failures == total {
            return Err(anyhow!("All {} messages file(s) failed to render", failures));
        }

        info!(
            "Finished processing {} file(s): {} written, {} skipped, {} failed",
            total,
            written.len(),
            skipped,
            failures
        );
        Ok(written)
    }

    /// Output directory for `file` found while walking `input_dir`
    fn folder_output_dir(&self, input_dir: &Path, file: &Path) -> PathBuf {
        let parent = file.parent().unwrap_or(Path::new("."));
        match &self.config.output_dir {
            Some(out_dir) => match parent.strip_prefix(input_dir) {
                Ok(relative) => out_dir.join(relative),
                Err(_) => out_dir.clone(),
            },
            None => parent.to_path_buf(),
        }
    }
}

/*!
 * # xliffgen - XLIFF translation file generator
 *
 * A Rust library for writing extracted translation messages as XLIFF files.
 *
 * ## Features
 *
 * - Render messages as XLIFF 2.0 with nested `<pc>` spans for paired
 *   placeholders and `<ph/>` markers for standalone ones
 * - Render messages as XLIFF 1.2 with `<x/>` markers
 * - Description and meaning notes
 * - Source and target, or target-only output
 * - Locale validation against ISO 639
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `message`: Extracted message model and placeholder classification
 * - `xml_file`: Indented XML writer with an explicit element stack
 * - `serializers`: One `TranslationSerializer` per file format:
 *   - `serializers::xliff2`: XLIFF 2.0
 *   - `serializers::xliff1`: XLIFF 1.2
 * - `app_config`: Configuration management
 * - `app_controller`: Reads message files, renders and writes output
 * - `file_utils`: File system operations
 * - `language_utils`: Locale utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod message;
pub mod serializers;
pub mod xml_file;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{MessageError, SerializeError, XmlError};
pub use message::{Message, PlaceholderKind};
pub use serializers::{TranslationFormat, TranslationSerializer, Xliff1Serializer, Xliff2Serializer};
pub use xml_file::{TagOptions, XmlFile};

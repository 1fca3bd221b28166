//! Cross-module tests for the analysis pipeline.

mod properties;

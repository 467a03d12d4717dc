use crate::utils::error::{EtlError, Result};
use std::collections::HashSet;

pub const SUPPORTED_OUTPUT_FORMATS: &[&str] = &["csv", "json", "zip"];

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// 輸入檔必須存在於設定中，且是允許的副檔名
pub fn validate_input_file(
    field_name: &str,
    path: Option<&str>,
    allowed_extensions: &[&str],
) -> Result<()> {
    let path = *validate_required_field(field_name, &path)?;
    validate_path(field_name, path)?;
    validate_file_extensions(field_name, &[path.to_string()], allowed_extensions)
}

pub fn validate_file_extensions(
    field_name: &str,
    files: &[String],
    allowed_extensions: &[&str],
) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    for file in files {
        match std::path::Path::new(file)
            .extension()
            .and_then(|ext| ext.to_str())
        {
            Some(extension) if allowed_set.contains(extension.to_ascii_lowercase().as_str()) => {}
            Some(extension) => {
                return Err(EtlError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: file.clone(),
                    reason: format!(
                        "Unsupported file extension: {}. Allowed extensions: {}",
                        extension,
                        allowed_extensions.join(", ")
                    ),
                });
            }
            None => {
                return Err(EtlError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: file.clone(),
                    reason: "File has no extension or invalid filename".to_string(),
                });
            }
        }
    }

    Ok(())
}

pub fn validate_output_formats(field_name: &str, formats: &[String]) -> Result<()> {
    if formats.is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: String::new(),
            reason: "At least one output format is required".to_string(),
        });
    }

    for format in formats {
        if !SUPPORTED_OUTPUT_FORMATS.contains(&format.as_str()) {
            return Err(EtlError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: format.clone(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    SUPPORTED_OUTPUT_FORMATS.join(", ")
                ),
            });
        }
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| EtlError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_path", "./output").is_ok());
        assert!(validate_path("output_path", "").is_err());
        assert!(validate_path("output_path", "out\0put").is_err());
    }

    #[test]
    fn test_validate_input_file() {
        assert!(validate_input_file("ivr_details", Some("ivr.csv"), &["csv"]).is_ok());
        assert!(validate_input_file("ivr_details", Some("IVR.CSV"), &["csv"]).is_ok());
        assert!(validate_input_file("ivr_details", Some("ivr.xlsx"), &["csv"]).is_err());
        assert!(validate_input_file("ivr_details", Some("ivr"), &["csv"]).is_err());

        let missing = validate_input_file("ivr_details", None, &["csv"]);
        assert!(matches!(missing, Err(EtlError::MissingConfigError { .. })));
    }

    #[test]
    fn test_validate_output_formats() {
        let formats = vec!["csv".to_string(), "zip".to_string()];
        assert!(validate_output_formats("output_formats", &formats).is_ok());
        assert!(validate_output_formats("output_formats", &[]).is_err());
        assert!(validate_output_formats("output_formats", &["tsv".to_string()]).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("pipeline.name", "ivr-mapping").is_ok());
        assert!(validate_non_empty_string("pipeline.name", "   ").is_err());
    }
}

/// Five9 匯出的 IVR 檔名後綴
pub const IVR_SUFFIX: &str = ".five9ivr";

/// 移除所有 `.five9ivr` 並去掉前後空白
pub fn normalize_ivr_name(name: &str) -> String {
    name.replace(IVR_SUFFIX, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_suffix_and_whitespace() {
        assert_eq!(normalize_ivr_name("CampA.five9ivr"), "CampA");
        assert_eq!(normalize_ivr_name("  CampA.five9ivr  "), "CampA");
        assert_eq!(normalize_ivr_name("CampA"), "CampA");
        assert_eq!(normalize_ivr_name(""), "");
        assert_eq!(normalize_ivr_name(".five9ivr"), "");
    }

    #[test]
    fn test_removes_every_occurrence() {
        assert_eq!(normalize_ivr_name("A.five9ivr.five9ivr"), "A");
        assert_eq!(normalize_ivr_name("A.five9ivrB"), "AB");
    }

    #[test]
    fn test_suffix_is_case_sensitive() {
        assert_eq!(normalize_ivr_name("CampA.FIVE9IVR"), "CampA.FIVE9IVR");
    }

    #[test]
    fn test_appending_suffix_normalizes_to_same_base() {
        for name in ["CampA", " Main Menu ", "sales_ivr", "", "x.five9"] {
            let suffixed = format!("{}{}", name, IVR_SUFFIX);
            assert_eq!(normalize_ivr_name(&suffixed), normalize_ivr_name(name));
        }
    }

    #[test]
    fn test_idempotent() {
        for name in ["CampA.five9ivr", "  B  ", "C.five9ivr .five9ivr", "\tD\n"] {
            let once = normalize_ivr_name(name);
            assert_eq!(normalize_ivr_name(&once), once);
        }
    }
}

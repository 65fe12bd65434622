use phf::phf_set;

/// Property containers. They never become nodes; their direct children are
/// folded into the owning element's attributes.
pub static PROPERTY_CONTAINERS: phf::Set<&'static str> = phf_set! {
    "oMathParaPr",
    "rPr",
    "ctrlPr",
    "fPr",
    "radPr",
    "sSupPr",
    "sSubPr",
    "sSubSupPr",
    "sPrePr",
    "naryPr",
    "dPr",
    "funcPr",
    "mPr",
    "accPr",
    "barPr",
    "boxPr",
    "borderBoxPr",
    "phantPr",
    "groupChrPr",
    "limLowPr",
    "limUppPr",
    "eqArrPr",
};

/// On/off properties: a missing `m:val` means "on"
pub static BOOLEAN_PROPERTIES: phf::Set<&'static str> = phf_set! {
    "degHide",
    "subHide",
    "supHide",
    "show",
    "grow",
    "shp",
    "noBreak",
    "opEmu",
    "diff",
    "zeroWid",
    "zeroAsc",
    "zeroDesc",
    "transp",
    "hideTop",
    "hideBot",
    "hideLeft",
    "hideRight",
    "strikeH",
    "strikeV",
    "strikeBLTR",
    "strikeTLBR",
    "maxDist",
    "objDist",
    "lit",
    "nor",
    "aln",
    "plcHide",
};

/// Whether `name` is a property container element
#[inline]
pub fn is_property_container(name: &str) -> bool {
    PROPERTY_CONTAINERS.contains(name)
}

/// Normalized value for a property element.
///
/// Boolean properties become `"1"`/`"0"` (absent means on); other
/// properties keep their value and are dropped when they have none.
pub fn normalize_property(name: &str, value: Option<&str>) -> Option<String> {
    if BOOLEAN_PROPERTIES.contains(name) {
        let on = match value.map(str::trim) {
            None | Some("") => true,
            Some(v) => !matches!(v, "0" | "off" | "false"),
        };
        return Some(if on { "1" } else { "0" }.to_string());
    }
    value.map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_containers() {
        assert!(is_property_container("radPr"));
        assert!(is_property_container("rPr"));
        assert!(!is_property_container("rad"));
        assert!(!is_property_container("e"));
    }

    #[test]
    fn test_boolean_normalization() {
        assert_eq!(normalize_property("degHide", None), Some("1".to_string()));
        assert_eq!(normalize_property("degHide", Some("on")), Some("1".to_string()));
        assert_eq!(normalize_property("degHide", Some("true")), Some("1".to_string()));
        assert_eq!(normalize_property("degHide", Some("off")), Some("0".to_string()));
        assert_eq!(normalize_property("show", Some("0")), Some("0".to_string()));
    }

    #[test]
    fn test_valued_properties() {
        assert_eq!(normalize_property("begChr", Some("[")), Some("[".to_string()));
        assert_eq!(normalize_property("begChr", Some("")), Some(String::new()));
        assert_eq!(normalize_property("chr", None), None);
    }
}

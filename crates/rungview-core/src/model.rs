//! Semantic model for ladder diagrams.
//!
//! A [`Diagram`] is an ordered sequence of [`Rung`]s, each an ordered sequence
//! of typed [`Element`]s, as produced by the structured-text conversion
//! service. The model is read-only input for the layout engine: rung and
//! element order is significant (it determines vertical and horizontal
//! placement) and is never reordered.
//!
//! The types deserialize directly from the conversion service's JSON payload.
//! Elements arriving with an unrecognized `"type"` tag map to
//! [`Element::Unknown`] rather than failing the whole diagram; advisory
//! position fields in the payload are ignored, since index-derived placement
//! is authoritative.

use serde::Deserialize;

/// A complete ladder diagram: ordered rungs plus producer metadata.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Diagram {
    #[serde(default)]
    rungs: Vec<Rung>,

    #[serde(default)]
    metadata: Option<Metadata>,
}

impl Diagram {
    /// Creates a diagram from rungs and optional metadata.
    pub fn new(rungs: Vec<Rung>, metadata: Option<Metadata>) -> Self {
        Self { rungs, metadata }
    }

    /// Returns the ordered rungs of this diagram.
    pub fn rungs(&self) -> &[Rung] {
        &self.rungs
    }

    /// Returns the producer metadata, if the conversion service supplied any.
    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    /// Returns true if the diagram has no rungs.
    pub fn is_empty(&self) -> bool {
        self.rungs.is_empty()
    }
}

/// Opaque producer metadata carried alongside a diagram.
///
/// Not used by layout or rendering; kept so callers can surface it. Every
/// field is optional: producers vary in what they emit, and a sparse
/// metadata block must not reject the diagram.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Metadata {
    #[serde(default, alias = "plcType")]
    plc_type: Option<String>,

    #[serde(default, alias = "generatedAt")]
    generated_at: Option<String>,
}

impl Metadata {
    pub fn new(plc_type: Option<String>, generated_at: Option<String>) -> Self {
        Self {
            plc_type,
            generated_at,
        }
    }

    /// Returns the target-PLC tag, if the producer supplied one.
    pub fn plc_type(&self) -> Option<&str> {
        self.plc_type.as_deref()
    }

    /// Returns the producer timestamp, if the producer supplied one.
    pub fn generated_at(&self) -> Option<&str> {
        self.generated_at.as_deref()
    }
}

/// One horizontal rule of a ladder diagram: an ordered chain of elements
/// originating at the left power rail.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Rung {
    #[serde(default)]
    elements: Vec<Element>,
}

impl Rung {
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    /// Returns the ordered elements of this rung.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}

/// A typed ladder element.
///
/// Closed tagged union over the symbols the engine knows how to place and
/// draw. Payload tags it does not recognize fall back to [`Element::Unknown`],
/// which is placed (it occupies its index slot) but never drawn.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    /// A two-terminal input condition symbol.
    Contact {
        address: String,

        #[serde(default)]
        description: Option<String>,

        /// Normally-open passes when true; normally-closed passes when false.
        #[serde(rename = "isNormallyOpen", default = "default_normally_open")]
        normally_open: bool,
    },

    /// A two-terminal output/actuation symbol.
    Coil {
        address: String,

        #[serde(default)]
        description: Option<String>,
    },

    /// A function block with a label drawn inside its body.
    Function {
        #[serde(default = "default_function_label")]
        label: String,

        #[serde(default)]
        address: Option<String>,
    },

    /// Catch-all for element tags this engine does not recognize.
    #[serde(other)]
    Unknown,
}

fn default_normally_open() -> bool {
    true
}

fn default_function_label() -> String {
    String::from("FUNC")
}

impl Element {
    /// Returns the device address, if this element carries one.
    pub fn address(&self) -> Option<&str> {
        match self {
            Self::Contact { address, .. } | Self::Coil { address, .. } => Some(address),
            Self::Function { address, .. } => address.as_deref(),
            Self::Unknown => None,
        }
    }

    /// Returns the human-readable description, if this element carries one.
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Contact { description, .. } | Self::Coil { description, .. } => {
                description.as_deref()
            }
            Self::Function { .. } | Self::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_contact_defaults_normally_open() {
        let element: Element =
            serde_json::from_str(r#"{"type": "contact", "address": "X0"}"#).unwrap();
        assert_eq!(
            element,
            Element::Contact {
                address: "X0".to_string(),
                description: None,
                normally_open: true,
            }
        );
    }

    #[test]
    fn test_deserialize_normally_closed_contact() {
        let element: Element = serde_json::from_str(
            r#"{"type": "contact", "address": "X1", "isNormallyOpen": false}"#,
        )
        .unwrap();
        assert!(matches!(
            element,
            Element::Contact {
                normally_open: false,
                ..
            }
        ));
    }

    #[test]
    fn test_deserialize_ignores_advisory_position_fields() {
        // The converter emits x/y hints; index-derived placement wins.
        let element: Element = serde_json::from_str(
            r#"{"type": "coil", "address": "Y0", "description": "Motor := TRUE", "x": 40, "y": 30}"#,
        )
        .unwrap();
        assert_eq!(element.address(), Some("Y0"));
        assert_eq!(element.description(), Some("Motor := TRUE"));
    }

    #[test]
    fn test_deserialize_function_label_default() {
        let element: Element = serde_json::from_str(r#"{"type": "function"}"#).unwrap();
        assert_eq!(
            element,
            Element::Function {
                label: "FUNC".to_string(),
                address: None,
            }
        );
    }

    #[test]
    fn test_unknown_tag_falls_back() {
        let element: Element =
            serde_json::from_str(r#"{"type": "timer", "address": "T0"}"#).unwrap();
        assert_eq!(element, Element::Unknown);
        assert_eq!(element.address(), None);
    }

    #[test]
    fn test_deserialize_full_diagram_payload() {
        let payload = r#"{
            "rungs": [
                {"elements": [
                    {"type": "contact", "address": "X0", "description": "Start"},
                    {"type": "coil", "address": "Y0"}
                ]},
                {"elements": []}
            ],
            "metadata": {"plc_type": "mitsubishi_fx", "generated_at": "2026-01-12T10:00:00"}
        }"#;

        let diagram: Diagram = serde_json::from_str(payload).unwrap();
        assert_eq!(diagram.rungs().len(), 2);
        assert_eq!(diagram.rungs()[0].elements().len(), 2);
        assert!(diagram.rungs()[1].elements().is_empty());

        let metadata = diagram.metadata().unwrap();
        assert_eq!(metadata.plc_type(), Some("mitsubishi_fx"));
        assert_eq!(metadata.generated_at(), Some("2026-01-12T10:00:00"));
    }

    #[test]
    fn test_deserialize_camel_case_metadata() {
        let payload = r#"{
            "rungs": [],
            "metadata": {"plcType": "omron_cx", "generatedAt": "2026-01-12T10:00:00"}
        }"#;

        let diagram: Diagram = serde_json::from_str(payload).unwrap();
        assert!(diagram.is_empty());
        assert_eq!(diagram.metadata().unwrap().plc_type(), Some("omron_cx"));
    }

    #[test]
    fn test_deserialize_sparse_metadata() {
        // Producers vary; a metadata block with missing fields is valid.
        let payload = r#"{"rungs": [], "metadata": {"plc_type": "mitsubishi"}}"#;
        let diagram: Diagram = serde_json::from_str(payload).unwrap();

        let metadata = diagram.metadata().unwrap();
        assert_eq!(metadata.plc_type(), Some("mitsubishi"));
        assert_eq!(metadata.generated_at(), None);

        let empty: Diagram =
            serde_json::from_str(r#"{"rungs": [], "metadata": {}}"#).unwrap();
        assert!(empty.metadata().unwrap().plc_type().is_none());
    }

    #[test]
    fn test_empty_payload_is_valid() {
        let diagram: Diagram = serde_json::from_str("{}").unwrap();
        assert!(diagram.is_empty());
        assert!(diagram.metadata().is_none());
    }
}

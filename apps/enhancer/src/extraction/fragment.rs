use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::extraction::ExtractionError;

/// A fragment record as delivered by the PDF text layer, before validation.
///
/// Every field is optional on the wire so that a single broken record is
/// reported against its page instead of failing the whole request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawFragment {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
}

/// What is wrong with a rejected fragment record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FragmentDefect {
    #[error("missing text")]
    MissingText,

    #[error("missing {0} coordinate")]
    MissingCoordinate(&'static str),

    #[error("{0} coordinate is not a finite number")]
    NonFiniteCoordinate(&'static str),
}

/// One run of text at a page position. Immutable once constructed.
///
/// `y` grows towards the top of the page (PDF user space), so larger `y`
/// means earlier in reading order.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFragment {
    text: String,
    x: f64,
    y: f64,
}

impl TextFragment {
    pub fn new(text: impl Into<String>, x: f64, y: f64) -> Result<Self, FragmentDefect> {
        if !x.is_finite() {
            return Err(FragmentDefect::NonFiniteCoordinate("x"));
        }
        if !y.is_finite() {
            return Err(FragmentDefect::NonFiniteCoordinate("y"));
        }
        Ok(Self {
            text: text.into(),
            x,
            y,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

impl TryFrom<RawFragment> for TextFragment {
    type Error = FragmentDefect;

    fn try_from(raw: RawFragment) -> Result<Self, Self::Error> {
        let text = raw.text.ok_or(FragmentDefect::MissingText)?;
        let x = raw.x.ok_or(FragmentDefect::MissingCoordinate("x"))?;
        let y = raw.y.ok_or(FragmentDefect::MissingCoordinate("y"))?;
        TextFragment::new(text, x, y)
    }
}

/// Validates one page worth of fragment records. The first malformed record
/// rejects the whole page.
pub fn parse_page(
    page: usize,
    raw_fragments: Vec<RawFragment>,
) -> Result<Vec<TextFragment>, ExtractionError> {
    raw_fragments
        .into_iter()
        .enumerate()
        .map(|(index, raw)| {
            TextFragment::try_from(raw).map_err(|defect| ExtractionError::InvalidFragment {
                page,
                index,
                defect,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_nan_and_infinity() {
        assert_eq!(
            TextFragment::new("a", f64::NAN, 0.0),
            Err(FragmentDefect::NonFiniteCoordinate("x"))
        );
        assert_eq!(
            TextFragment::new("a", 0.0, f64::INFINITY),
            Err(FragmentDefect::NonFiniteCoordinate("y"))
        );
    }

    #[test]
    fn test_raw_fragment_missing_fields_are_defects() {
        let missing_y = RawFragment {
            text: Some("a".to_string()),
            x: Some(1.0),
            y: None,
        };
        assert_eq!(
            TextFragment::try_from(missing_y),
            Err(FragmentDefect::MissingCoordinate("y"))
        );
        assert_eq!(
            TextFragment::try_from(RawFragment::default()),
            Err(FragmentDefect::MissingText)
        );
    }

    #[test]
    fn test_parse_page_reports_offending_index() {
        let page = vec![
            RawFragment {
                text: Some("ok".to_string()),
                x: Some(0.0),
                y: Some(0.0),
            },
            RawFragment {
                text: Some("broken".to_string()),
                x: None,
                y: Some(0.0),
            },
        ];
        match parse_page(3, page) {
            Err(ExtractionError::InvalidFragment {
                page,
                index,
                defect,
            }) => {
                assert_eq!(page, 3);
                assert_eq!(index, 1);
                assert_eq!(defect, FragmentDefect::MissingCoordinate("x"));
            }
            other => panic!("expected InvalidFragment, got {other:?}"),
        }
    }

    #[test]
    fn test_defect_messages_name_the_axis() {
        assert_eq!(FragmentDefect::MissingText.to_string(), "missing text");
        assert_eq!(
            FragmentDefect::MissingCoordinate("x").to_string(),
            "missing x coordinate"
        );
        let err = ExtractionError::InvalidFragment {
            page: 2,
            index: 0,
            defect: FragmentDefect::NonFiniteCoordinate("y"),
        };
        assert_eq!(
            err.to_string(),
            "Invalid fragment 0 on page 2: y coordinate is not a finite number"
        );
    }

    #[test]
    fn test_raw_fragment_deserializes_with_absent_fields() {
        let raw: RawFragment = serde_json::from_str(r#"{"text": "Rust", "x": 12.5}"#).unwrap();
        assert_eq!(raw.text.as_deref(), Some("Rust"));
        assert_eq!(raw.x, Some(12.5));
        assert!(raw.y.is_none());
    }
}

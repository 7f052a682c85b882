//! Node definitions: operator name plus attributes

use crate::dtype::DType;
use crate::error::{Error, Result};
use std::collections::BTreeMap;

/// Element type attribute
pub const ATTR_TYPE: &str = "T";
/// Axis (index) type attribute
pub const ATTR_INDEX_TYPE: &str = "Tidx";
/// Scan direction attribute
pub const ATTR_REVERSE: &str = "reverse";
/// Scan exclusivity attribute
pub const ATTR_EXCLUSIVE: &str = "exclusive";

/// Value of a node attribute
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AttrValue {
    /// Boolean flag
    Bool(bool),
    /// Data type
    Type(DType),
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<DType> for AttrValue {
    fn from(value: DType) -> Self {
        Self::Type(value)
    }
}

/// An operator invocation as described by the host framework
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeDef {
    op: String,
    attrs: BTreeMap<String, AttrValue>,
}

impl NodeDef {
    /// Node for operator `op` with no attributes
    pub fn new(op: impl Into<String>) -> Self {
        Self {
            op: op.into(),
            attrs: BTreeMap::new(),
        }
    }

    /// Builder-style attribute setter
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Operator name
    pub fn op(&self) -> &str {
        &self.op
    }

    /// Raw attribute lookup
    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.get(name)
    }

    /// Boolean attribute; `None` if absent
    pub fn get_bool(&self, name: &'static str) -> Result<Option<bool>> {
        match self.attrs.get(name) {
            None => Ok(None),
            Some(AttrValue::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(Error::invalid_argument(
                name,
                format!("expected a bool attribute, got {other:?}"),
            )),
        }
    }

    /// Type attribute; absent is `MissingAttr`
    pub fn get_type(&self, name: &'static str) -> Result<DType> {
        match self.attrs.get(name) {
            None => Err(Error::MissingAttr { name }),
            Some(AttrValue::Type(t)) => Ok(*t),
            Some(other) => Err(Error::invalid_argument(
                name,
                format!("expected a type attribute, got {other:?}"),
            )),
        }
    }
}

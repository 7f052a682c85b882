//! Explicit kernel registry
//!
//! The registry is an ordinary value built at startup and passed by
//! reference; nothing is registered through global state.

use super::node::{ATTR_INDEX_TYPE, ATTR_TYPE, NodeDef};
use super::{OpKernel, register_scan_kernels};
use crate::dtype::DType;
use crate::error::{Error, Result};
use crate::runtime::Runtime;
use log::debug;
use std::collections::HashMap;
use std::fmt;

/// Registry key: operator name plus type constraints
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KernelDef {
    /// Operator name
    pub op: String,
    /// Element type constraint (`T`)
    pub dtype: DType,
    /// Axis type constraint (`Tidx`)
    pub index_dtype: DType,
}

impl KernelDef {
    /// Create a key
    pub fn new(op: impl Into<String>, dtype: DType, index_dtype: DType) -> Self {
        Self {
            op: op.into(),
            dtype,
            index_dtype,
        }
    }
}

impl fmt::Display for KernelDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<T={}, Tidx={}>", self.op, self.dtype, self.index_dtype)
    }
}

/// Builds a kernel for a node definition
pub type KernelFactory<R> = fn(&NodeDef) -> Result<Box<dyn OpKernel<R>>>;

/// Maps kernel signatures to factories for runtime `R`
pub struct KernelRegistry<R: Runtime> {
    factories: HashMap<KernelDef, KernelFactory<R>>,
}

impl<R: Runtime> KernelRegistry<R> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Create a registry holding every scan kernel
    pub fn with_scan_kernels() -> Result<Self> {
        let mut registry = Self::new();
        register_scan_kernels(&mut registry)?;
        Ok(registry)
    }

    /// Register a factory; a signature may only be registered once
    pub fn register(&mut self, def: KernelDef, factory: KernelFactory<R>) -> Result<()> {
        if self.factories.contains_key(&def) {
            return Err(Error::DuplicateKernel {
                op: def.op,
                dtype: def.dtype,
                index_dtype: def.index_dtype,
            });
        }
        debug!("{}: registered kernel {def}", R::name());
        self.factories.insert(def, factory);
        Ok(())
    }

    /// Whether a signature is registered
    pub fn contains(&self, def: &KernelDef) -> bool {
        self.factories.contains_key(def)
    }

    /// Number of registered kernels
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Registered signatures, sorted
    pub fn kernel_defs(&self) -> Vec<&KernelDef> {
        let mut defs: Vec<_> = self.factories.keys().collect();
        defs.sort();
        defs
    }

    /// Build the kernel matching `node`'s operator and `T` / `Tidx` attributes
    pub fn create_kernel(&self, node: &NodeDef) -> Result<Box<dyn OpKernel<R>>> {
        let def = KernelDef::new(
            node.op(),
            node.get_type(ATTR_TYPE)?,
            node.get_type(ATTR_INDEX_TYPE)?,
        );
        let factory = self.factories.get(&def).ok_or_else(|| Error::KernelNotFound {
            op: def.op.clone(),
            dtype: def.dtype,
            index_dtype: def.index_dtype,
        })?;
        debug!("{}: creating kernel {def}", R::name());
        factory(node)
    }
}

impl<R: Runtime> Default for KernelRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Runtime> fmt::Debug for KernelRegistry<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KernelRegistry")
            .field("runtime", &R::name())
            .field("kernels", &self.kernel_defs())
            .finish()
    }
}

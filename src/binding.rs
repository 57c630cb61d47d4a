// SPDX-License-Identifier: MPL-2.0
//! Owner discovery for nested viewer components.
//!
//! A component needs to know which viewer host and which surface it belongs
//! to. Instead of searching a live widget tree, every owner passes an
//! [`Ancestry`] (the chain of enclosing owners) down to the children it
//! builds. A child resolves its owners once, on attach, by walking that chain
//! from the innermost frame outwards. A child attached without the required
//! owners stays unbound and inert.

use crate::ids::ViewerId;

/// What an enclosing owner can do for its descendants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    ViewerHost,
    ListSurface,
    IconSurface,
}

/// One frame of the containment chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Owner {
    pub capability: Capability,
    /// Viewer the owner belongs to (for a host, the host itself).
    pub viewer: ViewerId,
}

impl Owner {
    #[must_use]
    pub fn host(viewer: ViewerId) -> Self {
        Self {
            capability: Capability::ViewerHost,
            viewer,
        }
    }

    #[must_use]
    pub fn surface(capability: Capability, viewer: ViewerId) -> Self {
        Self { capability, viewer }
    }
}

/// Containment chain, outermost owner first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ancestry {
    chain: Vec<Owner>,
}

impl Ancestry {
    /// Chain with no owners at all: anything attached here stays unbound.
    #[must_use]
    pub fn detached() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn root(owner: Owner) -> Self {
        Self { chain: vec![owner] }
    }

    /// Chain for the children of `owner`, nested inside `self`.
    #[must_use]
    pub fn child(&self, owner: Owner) -> Self {
        let mut chain = self.chain.clone();
        chain.push(owner);
        Self { chain }
    }

    /// Nearest enclosing owner with `capability`.
    #[must_use]
    pub fn nearest(&self, capability: Capability) -> Option<Owner> {
        self.chain
            .iter()
            .rev()
            .find(|owner| owner.capability == capability)
            .copied()
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.chain.len()
    }
}

/// Owner references of a presentation item, fixed at attach time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub host: ViewerId,
    pub surface: Capability,
}

/// Resolves the host and the `surface` owner of a child attached under
/// `ancestry`. `None` if either is missing from the chain.
#[must_use]
pub fn bind(ancestry: &Ancestry, surface: Capability) -> Option<Binding> {
    let host = ancestry.nearest(Capability::ViewerHost)?;
    let surface = ancestry.nearest(surface)?;
    Some(Binding {
        host: host.viewer,
        surface: surface.capability,
    })
}

/// Attach-once state shared by every bindable component.
///
/// The first call to [`Attachment::attach`] performs the walk; later calls
/// return the cached result without walking again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Attachment {
    #[default]
    Detached,
    Bound(Binding),
    Unbound,
}

impl Attachment {
    pub fn attach(&mut self, ancestry: &Ancestry, surface: Capability) -> Option<Binding> {
        if let Attachment::Detached = self {
            *self = match bind(ancestry, surface) {
                Some(binding) => Attachment::Bound(binding),
                None => {
                    tracing::trace!(?surface, depth = ancestry.depth(), "component attached outside its owners");
                    Attachment::Unbound
                }
            };
        }
        self.binding()
    }

    #[must_use]
    pub fn binding(&self) -> Option<Binding> {
        match self {
            Attachment::Bound(binding) => Some(*binding),
            _ => None,
        }
    }
}

//! Listener registry for the host's command-execute event.
//!
//! Host callbacks stay alive exactly as long as the registry holds them; the
//! add-in owns the registry and clears it on stop.

use std::collections::BTreeMap;

use super::execute::CommandContext;

/// Callback invoked when the user triggers the command.
pub type ExecuteHandler = Box<dyn FnMut(&mut CommandContext<'_>)>;

/// Handle returned by [`HandlerRegistry::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandlerId(u64);

/// Owned set of execute listeners, notified in subscription order.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: BTreeMap<HandlerId, ExecuteHandler>,
    next_id: u64,
}

impl HandlerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener.
    pub fn subscribe(&mut self, handler: impl FnMut(&mut CommandContext<'_>) + 'static) -> HandlerId {
        let id = HandlerId(self.next_id);
        self.next_id += 1;
        self.handlers.insert(id, Box::new(handler));
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: HandlerId) -> bool {
        self.handlers.remove(&id).is_some()
    }

    /// Invokes every listener with the context.
    pub fn notify(&mut self, ctx: &mut CommandContext<'_>) {
        for handler in self.handlers.values_mut() {
            handler(&mut *ctx);
        }
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Drops every listener.
    pub fn clear(&mut self) {
        self.handlers.clear();
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("handlers", &self.handlers.keys().collect::<Vec<_>>())
            .field("next_id", &self.next_id)
            .finish()
    }
}

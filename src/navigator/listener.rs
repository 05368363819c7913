//! Backspace-to-exit listener bound to the search input.
//!
//! The listener is a guard: [`BackspaceListener::arm`] attaches it to the
//! input and dropping it detaches it. The controller keeps at most one guard,
//! owned by the current sub-mode, so replacing or clearing it always detaches
//! the previous one first.

use std::fmt;
use std::sync::Arc;

/// Handle returned by the input when a key listener is attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Keys the palette reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Backspace,
    /// Any key that does not edit the field backwards
    Other,
}

/// The input widget the controller borrows to attach its key listener
pub trait InputHandle: Send + Sync {
    fn attach_key_listener(&self) -> ListenerId;

    fn detach_key_listener(&self, id: ListenerId);
}

/// Armed backspace listener; detaches from the input on drop
pub struct BackspaceListener {
    input: Arc<dyn InputHandle>,
    id: ListenerId,
}

impl BackspaceListener {
    pub fn arm(input: Arc<dyn InputHandle>) -> Self {
        let id = input.attach_key_listener();
        tracing::debug!(listener = id.0, "backspace listener attached");
        Self { input, id }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Backspace on an already empty field leaves the sub-mode
    pub fn should_exit(&self, key: KeyCode, field_value: &str) -> bool {
        key == KeyCode::Backspace && field_value.is_empty()
    }
}

impl Drop for BackspaceListener {
    fn drop(&mut self) {
        self.input.detach_key_listener(self.id);
        tracing::debug!(listener = self.id.0, "backspace listener detached");
    }
}

impl fmt::Debug for BackspaceListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackspaceListener")
            .field("id", &self.id)
            .finish()
    }
}

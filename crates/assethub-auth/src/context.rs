//! Request principal.

use assethub_core::types::id::UserId;
use assethub_entity::shared_link::SharedLink;

/// The identity a request is made under.
///
/// A request authenticated through a shared link acts as the link owner for
/// bookkeeping, but its permissions come from the link alone.
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Authenticated user, or the link owner for shared link requests.
    pub user_id: UserId,
    /// Shared link the request came through, if any.
    pub shared_link: Option<SharedLink>,
}

impl AuthContext {
    /// Context for a signed-in user.
    pub fn user(user_id: UserId) -> Self {
        Self {
            user_id,
            shared_link: None,
        }
    }

    /// Context for an anonymous visitor holding a shared link.
    pub fn shared_link(link: SharedLink) -> Self {
        Self {
            user_id: link.user_id,
            shared_link: Some(link),
        }
    }

    /// Whether the request came through a shared link.
    pub fn is_shared_link(&self) -> bool {
        self.shared_link.is_some()
    }
}

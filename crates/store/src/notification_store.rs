//! Role-scoped notification list.

use orit_core::roles::UserRole;

use crate::models::notification::Notification;

/// Holds every notice ever emitted. Notices are never deleted in this
/// scope; listing order is reverse-chronological (newest first).
#[derive(Debug, Default)]
pub struct NotificationStore {
    items: Vec<Notification>,
}

impl NotificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.items.push(notification);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All notices, newest first.
    pub fn all(&self) -> Vec<Notification> {
        self.items.iter().rev().cloned().collect()
    }

    /// Notices visible to a role, newest first. Untargeted notices are
    /// visible to every role; `None` lists everything.
    pub fn for_role(&self, role: Option<UserRole>) -> Vec<Notification> {
        match role {
            None => self.all(),
            Some(role) => self
                .items
                .iter()
                .rev()
                .filter(|n| n.target_role.is_none() || n.target_role == Some(role))
                .cloned()
                .collect(),
        }
    }

    /// Flip a notice to read. Returns `true` only when the notice exists
    /// and was previously unread.
    pub fn mark_read(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(n) if !n.is_read => {
                n.is_read = true;
                true
            }
            _ => false,
        }
    }

    /// Unread notices visible to a role.
    pub fn unread_count(&self, role: UserRole) -> usize {
        self.items
            .iter()
            .filter(|n| !n.is_read)
            .filter(|n| n.target_role.is_none() || n.target_role == Some(role))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notice(title: &str, target: Option<UserRole>) -> Notification {
        Notification::new(title, "message", "ORD-1", target)
    }

    #[test]
    fn role_filter_includes_untargeted_notices() {
        let mut store = NotificationStore::new();
        store.push(notice("ops only", Some(UserRole::OritOps)));
        store.push(notice("agent only", Some(UserRole::FieldAgent)));
        store.push(notice("everyone", None));

        let ops = store.for_role(Some(UserRole::OritOps));
        let titles: Vec<_> = ops.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["everyone", "ops only"]);

        assert_eq!(store.for_role(None).len(), 3);
    }

    #[test]
    fn listing_is_newest_first() {
        let mut store = NotificationStore::new();
        store.push(notice("first", None));
        store.push(notice("second", None));

        let all = store.all();
        assert_eq!(all[0].title, "second");
        assert_eq!(all[1].title, "first");
    }

    #[test]
    fn mark_read_flips_once() {
        let mut store = NotificationStore::new();
        let n = notice("t", None);
        let id = n.id.clone();
        store.push(n);

        assert!(store.mark_read(&id));
        assert!(!store.mark_read(&id));
        assert!(!store.mark_read("missing"));
        assert!(store.all()[0].is_read);
    }

    #[test]
    fn unread_count_scopes_to_role() {
        let mut store = NotificationStore::new();
        store.push(notice("a", Some(UserRole::OritOps)));
        store.push(notice("b", Some(UserRole::FieldAgent)));
        store.push(notice("c", None));

        assert_eq!(store.unread_count(UserRole::OritOps), 2);
        assert_eq!(store.unread_count(UserRole::FieldAgent), 2);
    }
}

use crate::enums::FormModule;

/// Derives every persisted key from one namespace prefix.
///
/// The scheme is internal to this crate; nothing outside reads these keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    namespace: String,
}

impl StorageLayout {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Append-only list of submissions for one module
    pub fn submissions_key(&self, module: FormModule) -> String {
        format!("{}:submissions:{}", self.namespace, module.code())
    }

    /// Draft slot for one item of one module
    pub fn draft_key(&self, module: FormModule, item_id: &str) -> String {
        format!("{}:draft:{}:{}", self.namespace, module.code(), item_id)
    }

    pub fn pending_sync_key(&self) -> String {
        format!("{}:pending_sync", self.namespace)
    }

    pub fn session_key(&self) -> String {
        format!("{}:session", self.namespace)
    }

    pub fn checklists_key(&self) -> String {
        format!("{}:checklists", self.namespace)
    }

    pub fn language_key(&self) -> String {
        format!("{}:language", self.namespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_namespaced_and_distinct() {
        let layout = StorageLayout::new("htl");
        let keys = [
            layout.submissions_key(FormModule::Quotation),
            layout.submissions_key(FormModule::Requisition),
            layout.draft_key(FormModule::Checklist, "1"),
            layout.draft_key(FormModule::Checklist, "2"),
            layout.pending_sync_key(),
            layout.session_key(),
            layout.checklists_key(),
            layout.language_key(),
        ];
        for (i, a) in keys.iter().enumerate() {
            assert!(a.starts_with("htl:"));
            for b in keys.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}

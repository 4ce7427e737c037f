use std::collections::HashMap;

use super::account::{Account, AccountId, AccountInfo};

/// The chart of accounts: an ordered list of root account subtrees plus a
/// name index.
///
/// Name lookups resolve against the index, which records the first match of
/// a pre-order walk (every root's own name is checked before any root's
/// children are descended into). The index is rebuilt after each mutation,
/// so duplicate names anywhere in the tree alias deterministically to the
/// pre-order-first occurrence no matter how the tree was assembled.
#[derive(Debug, Default)]
pub struct AccountTree {
    roots: Vec<Account>,
    index: HashMap<String, AccountId>,
    next_id: u32,
}

impl AccountTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roots(&self) -> &[Account] {
        &self.roots
    }

    /// Adds a childless root account.
    pub fn add_root(&mut self, name: impl Into<String>, info: AccountInfo) -> AccountId {
        let id = AccountId(self.next_id);
        self.next_id += 1;
        self.roots.push(Account {
            id,
            name: name.into(),
            info,
            children: Vec::new(),
        });
        self.rebuild_index();
        id
    }

    /// Inserts a nested account path, blank segments filtered out first.
    ///
    /// The first segment must name an existing root; otherwise the whole row
    /// is a no-op. Missing intermediate accounts are created on the way down
    /// and inherit their parent's info.
    pub fn insert_path<S: AsRef<str>>(&mut self, path: &[S]) {
        let segments: Vec<&str> = path
            .iter()
            .map(|s| s.as_ref().trim())
            .filter(|s| !s.is_empty())
            .collect();
        let Some((root_name, rest)) = segments.split_first() else {
            return;
        };
        let mut next_id = self.next_id;
        let Some(root) = self.roots.iter_mut().find(|r| r.name == *root_name) else {
            return;
        };
        let mut node: &mut Account = root;
        for segment in rest {
            let pos = match node.children.iter().position(|c| c.name == *segment) {
                Some(pos) => pos,
                None => {
                    let info = node.info;
                    node.children.push(Account {
                        id: AccountId(next_id),
                        name: (*segment).to_string(),
                        info,
                        children: Vec::new(),
                    });
                    next_id += 1;
                    node.children.len() - 1
                }
            };
            node = &mut node.children[pos];
        }
        self.next_id = next_id;
        self.rebuild_index();
    }

    /// Attaches a synthetic account under the named parent (e.g. a derived
    /// "Net Revenue" line under equity). Returns `None` when the parent does
    /// not resolve.
    pub fn insert_child_of(
        &mut self,
        parent_name: &str,
        child_name: impl Into<String>,
        info: AccountInfo,
    ) -> Option<AccountId> {
        let parent_id = *self.index.get(parent_name)?;
        let id = AccountId(self.next_id);
        let parent = self.node_mut(parent_id)?;
        parent.children.push(Account {
            id,
            name: child_name.into(),
            info,
            children: Vec::new(),
        });
        self.next_id += 1;
        self.rebuild_index();
        Some(id)
    }

    /// Resolves a name to the pre-order-first account carrying it.
    pub fn find_by_name(&self, name: &str) -> Option<&Account> {
        let id = *self.index.get(name)?;
        self.node(id)
    }

    /// Resolves an account by identity.
    pub fn node(&self, id: AccountId) -> Option<&Account> {
        fn find(node: &Account, id: AccountId) -> Option<&Account> {
            if node.id == id {
                return Some(node);
            }
            node.children.iter().find_map(|c| find(c, id))
        }
        self.roots.iter().find_map(|r| find(r, id))
    }

    fn node_mut(&mut self, id: AccountId) -> Option<&mut Account> {
        fn find(node: &mut Account, id: AccountId) -> Option<&mut Account> {
            if node.id == id {
                return Some(node);
            }
            node.children.iter_mut().find_map(|c| find(c, id))
        }
        self.roots.iter_mut().find_map(|r| find(r, id))
    }

    fn rebuild_index(&mut self) {
        fn index_descendants(index: &mut HashMap<String, AccountId>, node: &Account) {
            for child in &node.children {
                index.entry(child.name.clone()).or_insert(child.id);
                index_descendants(index, child);
            }
        }
        let mut index = HashMap::new();
        // Root names shadow every nested name, regardless of root order.
        for root in &self.roots {
            index.entry(root.name.clone()).or_insert(root.id);
        }
        for root in &self.roots {
            index_descendants(&mut index, root);
        }
        self.index = index;
    }
}

//! Group-scoped candidate registry shared by sibling panels.

use std::cell::RefCell;
use std::rc::Rc;

use dragbox_common::ElementHandle;

/// Membership list of one coordinating group.
///
/// Cloning yields another handle to the same group. Readers iterate over a
/// [`snapshot`](GroupScope::snapshot) so attach/detach during an alignment
/// pass never invalidates the iteration.
#[derive(Debug, Clone, Default)]
pub struct GroupScope {
    members: Rc<RefCell<Vec<ElementHandle>>>,
}

impl GroupScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element. Returns `false` if it was already a member.
    pub fn add(&self, element: ElementHandle) -> bool {
        let mut members = self.members.borrow_mut();
        if members.contains(&element) {
            return false;
        }
        members.push(element);
        true
    }

    /// Unregister an element. Returns `false` if it was not a member.
    pub fn remove(&self, element: ElementHandle) -> bool {
        let mut members = self.members.borrow_mut();
        let before = members.len();
        members.retain(|m| *m != element);
        members.len() != before
    }

    /// Members in registration order.
    pub fn snapshot(&self) -> Vec<ElementHandle> {
        self.members.borrow().clone()
    }

    pub fn contains(&self, element: ElementHandle) -> bool {
        self.members.borrow().contains(&element)
    }

    pub fn len(&self) -> usize {
        self.members.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.borrow().is_empty()
    }

    /// Whether two handles refer to the same group.
    pub fn same_group(&self, other: &GroupScope) -> bool {
        Rc::ptr_eq(&self.members, &other.members)
    }
}

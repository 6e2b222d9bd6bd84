//! Pure alias rename over the group hierarchy.

use crate::model::{Group, GroupId, GroupsWithOwner};

/// Returns a renamed copy of `groups` and the group whose id is `group_id`.
///
/// Every user named `target_user` gets `alias`, in every group of every
/// owner, not only in the focused group. The focused group is taken after
/// the rename; if the id occurs more than once the last occurrence wins.
/// `groups` itself is left untouched.
pub fn rename_alias(
    groups: &[GroupsWithOwner],
    target_user: &str,
    alias: &str,
    group_id: GroupId,
) -> (Vec<GroupsWithOwner>, Option<Group>) {
    let mut renamed = groups.to_vec();
    let mut focused = None;

    for group in renamed.iter_mut().flat_map(|owned| owned.groups.iter_mut()) {
        for user in group.users.iter_mut().filter(|u| u.name == target_user) {
            user.alias = alias.to_string();
        }
        if group.id == group_id {
            focused = Some(group.clone());
        }
    }

    (renamed, focused)
}

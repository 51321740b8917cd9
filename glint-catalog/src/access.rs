use glint_model::Identity;
use glint_store::Filter;

/// Turns the caller's identity into a document visibility predicate.
///
/// With enforcement off every caller sees the whole collection. With it
/// on, an anonymous caller sees nothing, a signed-in account sees its own
/// documents, and an administrator additionally sees documents that have
/// no owner at all (shared assets that predate per-account ownership).
///
/// Authorization keys on [`glint_model::Role`], never on the account's
/// display name.
#[must_use]
pub fn visibility_filter(ownership_enforced: bool, identity: Option<&Identity>) -> Filter {
    if !ownership_enforced {
        return Filter::All;
    }
    match identity {
        None => Filter::Nothing,
        Some(account) if account.role.is_admin() => {
            Filter::AnyOf(vec![Filter::Owner(account.id), Filter::OwnerMissing])
        }
        Some(account) => Filter::Owner(account.id),
    }
}

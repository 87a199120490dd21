use crate::model::InventoryDraft;

/// Caller-supplied hooks for the dialog.
///
/// `handle_dialog` asks the host to change the dialog's visibility;
/// `handle_inventory` receives validated values on Save. Storage is the
/// host's business.
pub trait DialogCallbacks: Send + Sync {
    fn handle_dialog(&self, open: bool);
    fn handle_inventory(&self, values: InventoryDraft);
}

/// Adapts a pair of closures to [`DialogCallbacks`].
pub struct FnCallbacks<D, I> {
    on_dialog: D,
    on_inventory: I,
}

impl<D, I> FnCallbacks<D, I>
where
    D: Fn(bool) + Send + Sync,
    I: Fn(InventoryDraft) + Send + Sync,
{
    pub fn new(on_dialog: D, on_inventory: I) -> Self {
        Self {
            on_dialog,
            on_inventory,
        }
    }
}

impl<D, I> DialogCallbacks for FnCallbacks<D, I>
where
    D: Fn(bool) + Send + Sync,
    I: Fn(InventoryDraft) + Send + Sync,
{
    fn handle_dialog(&self, open: bool) {
        (self.on_dialog)(open)
    }

    fn handle_inventory(&self, values: InventoryDraft) {
        (self.on_inventory)(values)
    }
}

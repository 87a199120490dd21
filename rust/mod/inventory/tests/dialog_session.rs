//! Full dialog sessions through Flux: requests in, state and callbacks out.

use std::sync::{Arc, Mutex};

use openerp_flux::Flux;

use inventory::model::{FluxCatalog, Product};
use inventory::request::*;
use inventory::state::{DialogPhase, DialogState, ProductList};
use inventory::view::DialogAction;
use inventory::*;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Dialog(bool),
    Inventory(InventoryDraft),
}

type Calls = Arc<Mutex<Vec<Call>>>;

fn setup() -> (Flux, Calls) {
    let flux = Flux::new();
    let calls: Calls = Arc::new(Mutex::new(Vec::new()));

    let on_dialog = {
        let calls = calls.clone();
        move |open| calls.lock().unwrap().push(Call::Dialog(open))
    };
    let on_inventory = {
        let calls = calls.clone();
        move |values| calls.lock().unwrap().push(Call::Inventory(values))
    };
    let callbacks = Arc::new(FnCallbacks::new(on_dialog, on_inventory));
    register_handlers(&flux, Arc::new(DialogContext::new(callbacks)));
    (flux, calls)
}

fn calls(c: &Calls) -> Vec<Call> {
    c.lock().unwrap().clone()
}

fn dialog(flux: &Flux) -> DialogState {
    current_dialog(flux.store())
}

async fn open(flux: &Flux, initial: InventoryDraft) {
    let req = OpenDialogReq {
        form_name: "inventoryForm".into(),
        title: "Create".into(),
        initial_values: initial,
    };
    flux.emit(OpenDialogReq::PATH, req).await;
}

async fn change(flux: &Flux, field: Field, value: &str) {
    flux.emit(UpdateFieldReq::PATH, UpdateFieldReq::new(field, value)).await;
}

fn flour() -> InventoryDraft {
    InventoryDraft {
        name: "Flour".into(),
        product_type: "Bakery".into(),
        average_price: Some(2.5),
        amount: Some(10.0),
        unit_of_measurement: "kg".into(),
        ..InventoryDraft::empty()
    }
}

// ========================================================================
// Save
// ========================================================================

#[tokio::test]
async fn submit_valid_draft_hands_values_to_caller_then_closes() {
    let (flux, log) = setup();
    open(&flux, InventoryDraft::empty()).await;

    change(&flux, Field::Name, "Flour").await;
    change(&flux, Field::ProductType, "Bakery").await;
    change(&flux, Field::AveragePrice, "2.5").await;
    change(&flux, Field::Amount, "10").await;
    change(&flux, Field::UnitOfMeasurement, "kg").await;
    assert_eq!(dialog(&flux).phase, DialogPhase::Dirty);

    flux.emit(SubmitDialogReq::PATH, SubmitDialogReq).await;

    assert_eq!(
        calls(&log),
        vec![Call::Inventory(flour()), Call::Dialog(true)]
    );
    let state = dialog(&flux);
    assert_eq!(state.phase, DialogPhase::Saved);
    assert!(state.form.is_none());
}

#[tokio::test]
async fn submit_pristine_draft_does_nothing() {
    let (flux, log) = setup();
    open(&flux, flour()).await;

    flux.emit(SubmitDialogReq::PATH, SubmitDialogReq).await;

    assert!(calls(&log).is_empty());
    assert_eq!(dialog(&flux).phase, DialogPhase::Pristine);
}

#[tokio::test]
async fn submit_invalid_draft_shows_errors_and_stays_open() {
    let (flux, log) = setup();
    open(&flux, InventoryDraft::empty()).await;
    change(&flux, Field::Description, "something").await;

    flux.emit(SubmitDialogReq::PATH, SubmitDialogReq).await;

    assert!(calls(&log).is_empty());
    let state = dialog(&flux);
    assert!(state.is_open());
    let form = state.form.as_ref().unwrap();
    assert_eq!(
        form.errors().fields(),
        vec![Field::Name, Field::ProductType, Field::UnitOfMeasurement]
    );
    assert_eq!(form.submit_count(), 1);

    // Every field is touched now, so the view shows all messages.
    let view = DialogView::build(
        &state,
        &model::StaticCatalog(vec![]),
        &InventoryStrings::default(),
    );
    assert_eq!(
        view.row(Field::ProductType).unwrap().error.as_deref(),
        Some("A product type must be selected.")
    );
    assert_eq!(
        view.row(Field::UnitOfMeasurement).unwrap().error.as_deref(),
        Some("A unit of measurement must be selected.")
    );
}

#[tokio::test]
async fn fixing_errors_then_resubmitting_saves() {
    let (flux, log) = setup();
    open(&flux, InventoryDraft::empty()).await;
    change(&flux, Field::Name, "Flour").await;
    change(&flux, Field::Amount, "-1").await;
    flux.emit(SubmitDialogReq::PATH, SubmitDialogReq).await;
    assert!(calls(&log).is_empty());

    change(&flux, Field::Amount, "10").await;
    change(&flux, Field::ProductType, "Bakery").await;
    change(&flux, Field::UnitOfMeasurement, "kg").await;
    change(&flux, Field::AveragePrice, "2.5").await;
    flux.emit(SubmitDialogReq::PATH, SubmitDialogReq).await;

    assert_eq!(
        calls(&log),
        vec![Call::Inventory(flour()), Call::Dialog(true)]
    );
}

// ========================================================================
// Cancel
// ========================================================================

#[tokio::test]
async fn cancel_dirty_draft_never_saves() {
    let (flux, log) = setup();
    open(&flux, InventoryDraft::empty()).await;
    change(&flux, Field::Name, "Flour").await;

    flux.emit(CancelDialogReq::PATH, CancelDialogReq).await;

    assert_eq!(calls(&log), vec![Call::Dialog(false)]);
    assert_eq!(dialog(&flux).phase, DialogPhase::Cancelled);
}

#[tokio::test]
async fn cancel_while_closed_still_asks_host_to_close() {
    let (flux, log) = setup();

    flux.emit(CancelDialogReq::PATH, CancelDialogReq).await;

    assert_eq!(calls(&log), vec![Call::Dialog(false)]);
    assert_eq!(dialog(&flux).phase, DialogPhase::Closed);
}

// ========================================================================
// Session lifecycle
// ========================================================================

#[tokio::test]
async fn events_while_closed_are_ignored() {
    let (flux, log) = setup();
    assert_eq!(dialog(&flux).phase, DialogPhase::Closed);

    change(&flux, Field::Name, "Flour").await;
    flux.emit(TouchFieldReq::PATH, TouchFieldReq::new(Field::Name)).await;
    flux.emit(ResetDialogReq::PATH, ResetDialogReq).await;
    flux.emit(SubmitDialogReq::PATH, SubmitDialogReq).await;

    assert!(calls(&log).is_empty());
    let state = dialog(&flux);
    assert_eq!(state.phase, DialogPhase::Closed);
    assert!(state.form.is_none());
}

#[tokio::test]
async fn reopening_starts_a_fresh_session() {
    let (flux, _log) = setup();
    open(&flux, InventoryDraft::empty()).await;
    change(&flux, Field::Name, "Flour").await;
    flux.emit(CancelDialogReq::PATH, CancelDialogReq).await;

    open(&flux, InventoryDraft::empty()).await;

    let state = dialog(&flux);
    assert_eq!(state.phase, DialogPhase::Pristine);
    let form = state.form.as_ref().unwrap();
    assert_eq!(form.values(), &InventoryDraft::empty());
    assert!(!form.is_touched(Field::Name));
    assert_eq!(form.submit_count(), 0);
}

#[tokio::test]
async fn reset_returns_to_initial_values() {
    let (flux, _log) = setup();
    open(&flux, flour()).await;
    change(&flux, Field::Name, "Rye").await;
    assert_eq!(dialog(&flux).phase, DialogPhase::Dirty);

    flux.emit(ResetDialogReq::PATH, ResetDialogReq).await;

    let state = dialog(&flux);
    assert_eq!(state.phase, DialogPhase::Pristine);
    assert_eq!(state.form.as_ref().unwrap().values(), &flour());
}

#[tokio::test]
async fn unreadable_number_or_date_reads_as_empty() {
    let (flux, _log) = setup();
    let mut seed = flour();
    seed.best_before_date = chrono::NaiveDate::from_ymd_opt(2025, 12, 31);
    open(&flux, seed).await;

    change(&flux, Field::AveragePrice, "cheap").await;
    change(&flux, Field::BestBeforeDate, "31/12/2025").await;

    let state = dialog(&flux);
    let form = state.form.as_ref().unwrap();
    assert_eq!(form.values().average_price, None);
    assert_eq!(form.values().best_before_date, None);
    assert!(form.parse_error(Field::AveragePrice).is_some());
    assert!(form.parse_error(Field::BestBeforeDate).is_some());
    assert_eq!(state.phase, DialogPhase::Dirty);

    // An unknown field name is dropped by the handler.
    let before = form.values().clone();
    flux.emit(
        UpdateFieldReq::PATH,
        UpdateFieldReq {
            field: "colour".into(),
            value: "red".into(),
        },
    )
    .await;
    assert_eq!(dialog(&flux).form.unwrap().values(), &before);
}

#[tokio::test]
async fn save_after_unreadable_price_does_not_send_the_old_price() {
    let (flux, log) = setup();
    open(&flux, InventoryDraft::empty()).await;
    change(&flux, Field::Name, "Flour").await;
    change(&flux, Field::ProductType, "Bakery").await;
    change(&flux, Field::UnitOfMeasurement, "kg").await;
    change(&flux, Field::AveragePrice, "3").await;
    change(&flux, Field::AveragePrice, "3x").await;

    let view = DialogView::build(
        &dialog(&flux),
        &model::StaticCatalog(vec![]),
        &InventoryStrings::default(),
    );
    let row = view.row(Field::AveragePrice).unwrap();
    assert_eq!(row.value, "");
    assert_eq!(row.error.as_deref(), Some("Average Price must be a number."));

    flux.emit(SubmitDialogReq::PATH, SubmitDialogReq).await;

    let expected = InventoryDraft {
        name: "Flour".into(),
        product_type: "Bakery".into(),
        unit_of_measurement: "kg".into(),
        ..InventoryDraft::empty()
    };
    assert_eq!(
        calls(&log),
        vec![Call::Inventory(expected), Call::Dialog(true)]
    );
}

#[tokio::test]
async fn touching_a_field_reveals_its_error() {
    let (flux, _log) = setup();
    open(&flux, InventoryDraft::empty()).await;
    let catalog = model::StaticCatalog(vec![]);
    let strings = InventoryStrings::default();

    let view = DialogView::build(&dialog(&flux), &catalog, &strings);
    assert_eq!(view.row(Field::Name).unwrap().error, None);

    flux.emit(TouchFieldReq::PATH, TouchFieldReq::new(Field::Name)).await;

    let view = DialogView::build(&dialog(&flux), &catalog, &strings);
    assert_eq!(
        view.row(Field::Name).unwrap().error.as_deref(),
        Some("An inventory name is required.")
    );
}

// ========================================================================
// View + shared state
// ========================================================================

#[tokio::test]
async fn view_reads_products_from_flux_state() {
    let (flux, _log) = setup();
    flux.store().set(
        ProductList::PATH,
        ProductList(vec![Product::new("p1", "Bakery"), Product::new("p2", "Hops")]),
    );
    let catalog = FluxCatalog::new(Arc::clone(flux.store()));
    open(&flux, InventoryDraft::empty()).await;

    let view = DialogView::build(&dialog(&flux), &catalog, &InventoryStrings::new("ja"));
    assert!(view.open);
    assert_eq!(view.heading, "在庫をCreate");
    assert!(!view.action(DialogAction::Save).unwrap().enabled);

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["rows"][1]["kind"]["options"][1]["value"], "Hops");
    assert_eq!(json["rows"][1]["kind"]["options"][1]["key"], "p2");
}

#[tokio::test]
async fn subscribers_see_every_dialog_change() {
    let (flux, _log) = setup();
    let phases = Arc::new(Mutex::new(Vec::new()));
    {
        let phases = phases.clone();
        flux.subscribe(DialogState::PATH, move |_, value| {
            if let Some(state) = value.downcast_ref::<DialogState>() {
                phases.lock().unwrap().push(state.phase);
            }
        });
    }

    open(&flux, InventoryDraft::empty()).await;
    change(&flux, Field::Name, "Flour").await;
    flux.emit(CancelDialogReq::PATH, CancelDialogReq).await;

    assert_eq!(
        *phases.lock().unwrap(),
        vec![DialogPhase::Pristine, DialogPhase::Dirty, DialogPhase::Cancelled]
    );
}

// ========================================================================
// Book host
// ========================================================================

#[tokio::test]
async fn book_host_creates_and_edits_records() {
    let flux = Flux::new();
    let host = Arc::new(BookHost::new(Arc::new(InventoryBook::new())));
    register_handlers(&flux, Arc::new(DialogContext::new(host.clone())));

    host.begin_create();
    open(&flux, InventoryDraft::empty()).await;
    change(&flux, Field::Name, "Flour").await;
    change(&flux, Field::ProductType, "Bakery").await;
    change(&flux, Field::UnitOfMeasurement, "kg").await;
    flux.emit(SubmitDialogReq::PATH, SubmitDialogReq).await;

    let stored = host.book().find_all();
    assert_eq!(stored.len(), 1);
    assert!(!host.is_dialog_open());

    let seed = host.begin_edit(&stored[0].id).unwrap();
    open(&flux, seed).await;
    change(&flux, Field::NeverExpires, "true").await;
    flux.emit(SubmitDialogReq::PATH, SubmitDialogReq).await;

    let stored = host.book().find_all();
    assert_eq!(stored.len(), 1);
    assert!(stored[0].values.never_expires);
}

use crate::routes::today;
use devayu_types::inventory::{demo_inventory, InventoryDraft, StockStatus};
use devayu_types::patients::{add_note, demo_notes, find_patient, notes_for, search_patients, NoteDraft};
use devayu_types::pharmacy::format_cents;
use devayu_types::vitals::{add_vitals, demo_vitals, trend, VitalsForm};
use devayu_types::{Page, Role};
use devayu_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle,
    DialogContent, DialogRoot, DialogTitle, Input, Label, PageActions, PageHeader, PageSubtitle,
    PageTitle,
};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdPlus, LdTrash2};
use dioxus_free_icons::Icon;
use std::collections::HashMap;

fn stock_variant(status: StockStatus) -> BadgeVariant {
    match status {
        StockStatus::Good => BadgeVariant::Success,
        StockStatus::Low => BadgeVariant::Warning,
        StockStatus::Critical => BadgeVariant::Destructive,
    }
}

/// Labelled text input bound to one field of a form signal.
#[component]
fn FormField(
    id: &'static str,
    label: &'static str,
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] error: Option<String>,
    #[props(default = "text")] input_type: &'static str,
) -> Element {
    rsx! {
        div { class: "form-field",
            Label { html_for: "{id}", "{label}" }
            Input {
                id: id,
                input_type: input_type.to_string(),
                value: value,
                on_input: move |e: FormEvent| on_input.call(e.value()),
                error: error,
            }
        }
    }
}

/// Latest reading with its change against the previous one.
#[component]
fn VitalCard(label: &'static str, value: String, unit: &'static str, current: Option<f64>, previous: Option<f64>) -> Element {
    let change = trend(current, previous, false);

    rsx! {
        Card { class: "vital-card",
            CardContent {
                div { class: "item-row",
                    span { class: "item-meta", "{label}" }
                    if let Some(t) = change {
                        span {
                            class: "vital-trend",
                            "data-improving": if t.improving { "true" } else { "false" },
                            if t.rising { "▲ " } else { "▼ " }
                            "{t.percent:.1}%"
                        }
                    }
                }
                div { class: "stat-value", "{value}" }
                div { class: "item-meta", "{unit}" }
            }
        }
    }
}

/// Patient health records: latest vitals with trends and the full log.
#[component]
pub fn RecordsPatient() -> Element {
    let mut records = use_signal(demo_vitals);
    let mut show_add = use_signal(|| false);
    let mut form = use_signal(|| VitalsForm::new(today()));
    let mut errors = use_signal(HashMap::<String, String>::new);

    let save = move |_: MouseEvent| {
        let result = add_vitals(&mut records.write(), &form());
        match result {
            Ok(_) => {
                form.set(VitalsForm::new(today()));
                errors.set(HashMap::new());
                show_add.set(false);
            }
            Err(e) => errors.set(e.field_errors),
        }
    };

    let log = records.read().clone();
    let latest = log.first().cloned();
    let previous = log.get(1).cloned();
    let title = Page::Records(Role::Patient).title();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }

        div { class: "page",
            PageHeader {
                div {
                    PageTitle { "{title}" }
                    PageSubtitle { "Track your vital signs over time" }
                }
                PageActions {
                    Button {
                        onclick: move |_| {
                            errors.set(HashMap::new());
                            show_add.set(true);
                        },
                        Icon { icon: LdPlus, width: 18, height: 18 }
                        "Add Record"
                    }
                }
            }

            if let Some(latest) = latest {
                div { class: "stat-grid",
                    VitalCard {
                        label: "Blood Pressure",
                        value: latest.blood_pressure.clone(),
                        unit: "mmHg",
                        current: latest.systolic(),
                        previous: previous.as_ref().and_then(|p| p.systolic()),
                    }
                    VitalCard {
                        label: "Sugar Level",
                        value: latest.sugar_level.clone(),
                        unit: "fasting",
                        current: latest.sugar(),
                        previous: previous.as_ref().and_then(|p| p.sugar()),
                    }
                    VitalCard {
                        label: "Heart Rate",
                        value: latest.heart_rate.map(|b| b.to_string()).unwrap_or_else(|| "-".to_string()),
                        unit: "bpm",
                        current: latest.heart_rate.map(f64::from),
                        previous: previous.as_ref().and_then(|p| p.heart_rate).map(f64::from),
                    }
                    VitalCard {
                        label: "Weight",
                        value: latest.weight_kg.map(|w| format!("{w:.1}")).unwrap_or_else(|| "-".to_string()),
                        unit: "kg",
                        current: latest.weight_kg,
                        previous: previous.as_ref().and_then(|p| p.weight_kg),
                    }
                }
            } else {
                p { class: "empty-state", "No readings yet." }
            }

            Card {
                CardHeader { CardTitle { "History" } }
                CardContent {
                    for record in log.iter() {
                        div { key: "{record.id}", class: "item-row",
                            div {
                                div { class: "item-title", "{record.date}" }
                                div { class: "item-meta",
                                    "BP {record.blood_pressure} · Sugar {record.sugar_level} · {record.temperature}"
                                }
                                if let Some(text) = record.notes.clone() {
                                    div { class: "item-notes", "{text}" }
                                }
                            }
                        }
                    }
                }
            }

            DialogRoot {
                open: show_add(),
                on_open_change: move |open: bool| show_add.set(open),
                DialogContent {
                    DialogTitle { "Add Vital Record" }
                    FormField {
                        id: "vitals_date",
                        label: "Date",
                        input_type: "date",
                        value: form.read().date.clone(),
                        on_input: move |v: String| form.write().date = v,
                        error: errors.read().get("date").cloned(),
                    }
                    FormField {
                        id: "vitals_bp",
                        label: "Blood Pressure",
                        value: form.read().blood_pressure.clone(),
                        on_input: move |v: String| form.write().blood_pressure = v,
                        error: errors.read().get("blood_pressure").cloned(),
                    }
                    FormField {
                        id: "vitals_sugar",
                        label: "Sugar Level",
                        value: form.read().sugar_level.clone(),
                        on_input: move |v: String| form.write().sugar_level = v,
                        error: errors.read().get("sugar_level").cloned(),
                    }
                    FormField {
                        id: "vitals_weight",
                        label: "Weight (kg)",
                        value: form.read().weight.clone(),
                        on_input: move |v: String| form.write().weight = v,
                        error: errors.read().get("weight").cloned(),
                    }
                    FormField {
                        id: "vitals_heart_rate",
                        label: "Heart Rate (bpm)",
                        value: form.read().heart_rate.clone(),
                        on_input: move |v: String| form.write().heart_rate = v,
                        error: errors.read().get("heart_rate").cloned(),
                    }
                    FormField {
                        id: "vitals_temperature",
                        label: "Temperature",
                        value: form.read().temperature.clone(),
                        on_input: move |v: String| form.write().temperature = v,
                    }
                    FormField {
                        id: "vitals_notes",
                        label: "Notes",
                        value: form.read().notes.clone(),
                        on_input: move |v: String| form.write().notes = v,
                    }
                    div { class: "item-actions",
                        Button { variant: ButtonVariant::Ghost, onclick: move |_| show_add.set(false), "Cancel" }
                        Button { onclick: save, "Save Record" }
                    }
                }
            }
        }
    }
}

/// Doctor's patient list with per-patient consultation notes.
#[component]
pub fn RecordsDoctor() -> Element {
    let mut query = use_signal(String::new);
    let mut selected = use_signal(|| Option::<u32>::None);
    let mut notes = use_signal(demo_notes);
    let mut show_add = use_signal(|| false);
    let mut draft = use_signal(NoteDraft::default);
    let mut errors = use_signal(HashMap::<String, String>::new);
    let mut notice = use_signal(|| Option::<String>::None);

    let save = move |_: MouseEvent| {
        let Some(patient_id) = selected() else {
            return;
        };
        let result = add_note(&mut notes.write(), patient_id, &draft(), today());
        match result {
            Ok(_) => {
                draft.set(NoteDraft::default());
                errors.set(HashMap::new());
                show_add.set(false);
            }
            Err(e) if e.field_errors.is_empty() => {
                notice.set(Some(e.message));
                show_add.set(false);
            }
            Err(e) => errors.set(e.field_errors),
        }
    };

    let patients = search_patients(&query());
    let patient = selected().and_then(find_patient);
    let all_notes = notes.read().clone();
    let chart = selected().map(|id| notes_for(&all_notes, id)).unwrap_or_default();
    let title = Page::Records(Role::Doctor).title();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }

        div { class: "page",
            PageHeader {
                div {
                    PageTitle { "{title}" }
                    PageSubtitle { "Manage patient medical records and notes" }
                }
            }

            if let Some(msg) = notice() {
                div { class: "page-error", "{msg}" }
            }

            if let Some(patient) = patient {
                Card {
                    CardHeader {
                        CardTitle { "{patient.name}" }
                    }
                    CardContent {
                        div { class: "item-meta", "{patient.age} yrs · {patient.department} · {patient.phone}" }
                        div { class: "item-actions",
                            Button { variant: ButtonVariant::Ghost, onclick: move |_| selected.set(None), "Back to Patients" }
                            Button {
                                onclick: move |_| {
                                    errors.set(HashMap::new());
                                    show_add.set(true);
                                },
                                Icon { icon: LdPlus, width: 18, height: 18 }
                                "Add Note"
                            }
                        }
                    }
                }
                if chart.is_empty() {
                    p { class: "empty-state", "No notes for this patient yet." }
                }
                for note in chart {
                    Card { key: "{note.id}", class: "record-card",
                        CardContent {
                            div { class: "item-row",
                                div { class: "item-title", "{note.title}" }
                                span { class: "item-date", "{note.date}" }
                            }
                            p { "{note.content}" }
                            if let Some(d) = note.diagnosis.clone() {
                                div { class: "item-meta", "Diagnosis: {d}" }
                            }
                            if let Some(rx) = note.prescription.clone() {
                                div { class: "item-meta", "Prescription: {rx}" }
                            }
                            if let Some(f) = note.follow_up {
                                div { class: "item-meta", "Follow-up: {f}" }
                            }
                        }
                    }
                }
            } else {
                Input {
                    placeholder: "Search patients by name or phone",
                    value: query(),
                    on_input: move |e: FormEvent| query.set(e.value()),
                }
                if patients.is_empty() {
                    p { class: "empty-state", "No patients match \"{query}\"." }
                }
                for p in patients {
                    Card { key: "{p.id}", class: "record-card",
                        CardContent {
                            div { class: "item-row",
                                div {
                                    div { class: "item-title", "{p.name}" }
                                    div { class: "item-meta", "{p.age} yrs · {p.condition}" }
                                    div { class: "item-meta", "Last visit {p.last_visit}" }
                                }
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: move |_| selected.set(Some(p.id)),
                                    "View Records"
                                }
                            }
                        }
                    }
                }
            }

            DialogRoot {
                open: show_add(),
                on_open_change: move |open: bool| show_add.set(open),
                DialogContent {
                    DialogTitle { "Add Note" }
                    FormField {
                        id: "note_title",
                        label: "Title",
                        value: draft.read().title.clone(),
                        on_input: move |v: String| draft.write().title = v,
                        error: errors.read().get("title").cloned(),
                    }
                    FormField {
                        id: "note_content",
                        label: "Notes",
                        value: draft.read().content.clone(),
                        on_input: move |v: String| draft.write().content = v,
                        error: errors.read().get("content").cloned(),
                    }
                    FormField {
                        id: "note_diagnosis",
                        label: "Diagnosis",
                        value: draft.read().diagnosis.clone(),
                        on_input: move |v: String| draft.write().diagnosis = v,
                    }
                    FormField {
                        id: "note_prescription",
                        label: "Prescription",
                        value: draft.read().prescription.clone(),
                        on_input: move |v: String| draft.write().prescription = v,
                    }
                    FormField {
                        id: "note_follow_up",
                        label: "Follow-up",
                        input_type: "date",
                        value: draft.read().follow_up.clone(),
                        on_input: move |v: String| draft.write().follow_up = v,
                        error: errors.read().get("follow_up").cloned(),
                    }
                    div { class: "item-actions",
                        Button { variant: ButtonVariant::Ghost, onclick: move |_| show_add.set(false), "Cancel" }
                        Button { onclick: save, "Save Note" }
                    }
                }
            }
        }
    }
}

/// Pharmacy inventory: stock levels, low-stock filter, add, update and delete.
#[component]
pub fn RecordsPharma() -> Element {
    let mut inventory = use_signal(demo_inventory);
    let mut query = use_signal(String::new);
    let mut low_only = use_signal(|| false);
    let mut show_add = use_signal(|| false);
    let mut draft = use_signal(InventoryDraft::default);
    let mut errors = use_signal(HashMap::<String, String>::new);
    let mut editing = use_signal(|| Option::<u32>::None);
    let mut new_quantity = use_signal(String::new);
    let mut notice = use_signal(|| Option::<String>::None);

    let save = move |_: MouseEvent| {
        let result = inventory.write().add(&draft());
        match result {
            Ok(_) => {
                draft.set(InventoryDraft::default());
                errors.set(HashMap::new());
                show_add.set(false);
            }
            Err(e) => errors.set(e.field_errors),
        }
    };

    let update_stock = move |_: MouseEvent| {
        let Some(id) = editing() else {
            return;
        };
        let Ok(quantity) = new_quantity().trim().parse::<u32>() else {
            errors.set(HashMap::from([(
                "new_quantity".to_string(),
                "Quantity must be a whole number".to_string(),
            )]));
            return;
        };
        let result = inventory.write().set_quantity(id, quantity);
        if let Err(e) = result {
            notice.set(Some(e.message));
        }
        errors.set(HashMap::new());
        editing.set(None);
    };

    let stock = inventory.read().clone();
    let visible = stock.filter(&query(), low_only());
    let item_count = stock.items().len();
    let value_label = stock.total_value_label();
    let low_count = stock.low_stock_count();
    let editing_item = editing().and_then(|id| stock.get(id).cloned());
    let title = Page::Records(Role::Pharma).title();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }

        div { class: "page",
            PageHeader {
                div {
                    PageTitle { "{title}" }
                    PageSubtitle { "Manage pharmacy inventory and stock" }
                }
                PageActions {
                    Button {
                        onclick: move |_| {
                            errors.set(HashMap::new());
                            show_add.set(true);
                        },
                        Icon { icon: LdPlus, width: 18, height: 18 }
                        "Add Medicine"
                    }
                }
            }

            if let Some(msg) = notice() {
                div { class: "page-error", "{msg}" }
            }

            div { class: "stat-grid",
                Card {
                    CardContent {
                        div { class: "stat-value", "{item_count}" }
                        div { class: "stat-label", "Total Items" }
                    }
                }
                Card {
                    CardContent {
                        div { class: "stat-value", "{low_count}" }
                        div { class: "stat-label", "Low Stock" }
                    }
                }
                Card {
                    CardContent {
                        div { class: "stat-value", "{value_label}" }
                        div { class: "stat-label", "Inventory Value" }
                    }
                }
            }

            if low_count > 0 {
                div { class: "page-notice",
                    if low_count == 1 { "1 item with low stock" } else { "{low_count} items with low stock" }
                }
            }

            Input {
                placeholder: "Search medicines",
                value: query(),
                on_input: move |e: FormEvent| query.set(e.value()),
            }

            div { class: "filter-tabs",
                button {
                    class: "filter-tab",
                    "data-active": if low_only() { "false" } else { "true" },
                    onclick: move |_| low_only.set(false),
                    "All Items"
                }
                button {
                    class: "filter-tab",
                    "data-active": if low_only() { "true" } else { "false" },
                    onclick: move |_| low_only.set(true),
                    "Low Stock"
                }
            }

            if visible.is_empty() {
                p { class: "empty-state", "Nothing to show." }
            }

            for item in visible {
                Card { key: "{item.id}", class: "record-card",
                    CardContent {
                        div { class: "item-row",
                            div {
                                div { class: "item-title", "{item.name}" }
                                div { class: "item-meta",
                                    "{item.quantity} units · reorder at {item.reorder_level} · {format_cents(item.price_cents)}"
                                }
                                if let Some(expiry) = item.expiry {
                                    div { class: "item-meta", "Expires {expiry}" }
                                }
                            }
                            Badge { variant: stock_variant(item.status()), "{item.status().label()}" }
                        }
                        div { class: "item-actions",
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: {
                                    let id = item.id;
                                    let quantity = item.quantity;
                                    move |_| {
                                        new_quantity.set(quantity.to_string());
                                        errors.set(HashMap::new());
                                        editing.set(Some(id));
                                    }
                                },
                                "Update Stock"
                            }
                            Button {
                                variant: ButtonVariant::Ghost,
                                aria_label: "Delete",
                                onclick: {
                                    let id = item.id;
                                    move |_| {
                                        if let Err(e) = inventory.write().remove(id) {
                                            notice.set(Some(e.message));
                                        }
                                    }
                                },
                                Icon { icon: LdTrash2, width: 16, height: 16 }
                            }
                        }
                    }
                }
            }

            DialogRoot {
                open: show_add(),
                on_open_change: move |open: bool| show_add.set(open),
                DialogContent {
                    DialogTitle { "Add Medicine" }
                    FormField {
                        id: "stock_name",
                        label: "Medicine Name",
                        value: draft.read().name.clone(),
                        on_input: move |v: String| draft.write().name = v,
                        error: errors.read().get("name").cloned(),
                    }
                    FormField {
                        id: "stock_quantity",
                        label: "Quantity",
                        input_type: "number",
                        value: draft.read().quantity.clone(),
                        on_input: move |v: String| draft.write().quantity = v,
                        error: errors.read().get("quantity").cloned(),
                    }
                    FormField {
                        id: "stock_reorder",
                        label: "Reorder Level",
                        input_type: "number",
                        value: draft.read().reorder_level.clone(),
                        on_input: move |v: String| draft.write().reorder_level = v,
                        error: errors.read().get("reorder_level").cloned(),
                    }
                    FormField {
                        id: "stock_price",
                        label: "Price",
                        value: draft.read().price.clone(),
                        on_input: move |v: String| draft.write().price = v,
                        error: errors.read().get("price").cloned(),
                    }
                    FormField {
                        id: "stock_manufacturer",
                        label: "Manufacturer",
                        value: draft.read().manufacturer.clone(),
                        on_input: move |v: String| draft.write().manufacturer = v,
                    }
                    FormField {
                        id: "stock_expiry",
                        label: "Expiry Date",
                        input_type: "date",
                        value: draft.read().expiry_date.clone(),
                        on_input: move |v: String| draft.write().expiry_date = v,
                        error: errors.read().get("expiry_date").cloned(),
                    }
                    div { class: "item-actions",
                        Button { variant: ButtonVariant::Ghost, onclick: move |_| show_add.set(false), "Cancel" }
                        Button { onclick: save, "Add Medicine" }
                    }
                }
            }

            DialogRoot {
                open: editing_item.is_some(),
                on_open_change: move |open: bool| {
                    if !open {
                        editing.set(None);
                    }
                },
                DialogContent {
                    DialogTitle { "Update Stock" }
                    if let Some(item) = editing_item {
                        div { class: "item-meta", "{item.name}: {item.quantity} units on hand" }
                    }
                    FormField {
                        id: "stock_new_quantity",
                        label: "New Quantity",
                        input_type: "number",
                        value: new_quantity(),
                        on_input: move |v: String| new_quantity.set(v),
                        error: errors.read().get("new_quantity").cloned(),
                    }
                    div { class: "item-actions",
                        Button { variant: ButtonVariant::Ghost, onclick: move |_| editing.set(None), "Cancel" }
                        Button { onclick: update_stock, "Save" }
                    }
                }
            }
        }
    }
}

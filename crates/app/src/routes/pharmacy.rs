use devayu_types::pharmacy::{format_cents, search_medicines, Availability, Cart, ShippingInfo};
use devayu_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, DialogContent,
    DialogDescription, DialogRoot, DialogTitle, Input, Label, PageActions, PageHeader,
    PageSubtitle, PageTitle,
};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdMinus, LdPlus, LdShoppingCart, LdTrash2};
use dioxus_free_icons::Icon;
use std::collections::HashMap;

fn availability_variant(availability: Availability) -> BadgeVariant {
    match availability {
        Availability::InStock => BadgeVariant::Success,
        Availability::LowStock => BadgeVariant::Warning,
        Availability::OutOfStock => BadgeVariant::Destructive,
    }
}

/// Medicine catalogue with search, a cart and checkout.
#[component]
pub fn Pharmacy() -> Element {
    let mut query = use_signal(String::new);
    let mut cart = use_signal(Cart::default);
    let mut show_cart = use_signal(|| false);
    let mut show_checkout = use_signal(|| false);
    let mut shipping = use_signal(ShippingInfo::default);
    let mut shipping_errors = use_signal(HashMap::<String, String>::new);
    let mut notice = use_signal(|| Option::<String>::None);

    let medicines = search_medicines(&query());
    let lines = cart.read().items().to_vec();
    let (subtotal, shipping_fee, total) = {
        let c = cart.read();
        (c.subtotal_cents(), c.shipping_cents(), c.total_cents())
    };

    let place_order = move |_: MouseEvent| {
        let info = shipping();
        match cart.write().checkout(&info) {
            Ok(receipt) => {
                notice.set(Some(receipt.summary()));
                shipping.set(ShippingInfo::default());
                shipping_errors.set(HashMap::new());
                show_checkout.set(false);
            }
            Err(e) => shipping_errors.set(e.field_errors),
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }

        div { class: "page",
            PageHeader {
                div {
                    PageTitle { "Pharmacy" }
                    PageSubtitle { "Order medicines online" }
                }
                PageActions {
                    Button {
                        variant: ButtonVariant::Outline,
                        class: "cart-button",
                        onclick: move |_| show_cart.set(true),
                        Icon { icon: LdShoppingCart, width: 20, height: 20 }
                        if !lines.is_empty() {
                            span { class: "cart-count", "{lines.len()}" }
                        }
                    }
                }
            }

            if let Some(msg) = notice() {
                div { class: "page-notice", "{msg}" }
            }

            Input {
                placeholder: "Search medicines by name or brand",
                value: query(),
                on_input: move |e: FormEvent| query.set(e.value()),
            }

            if medicines.is_empty() {
                p { class: "empty-state", "No medicines match \"{query}\"." }
            }

            div { class: "medicine-grid",
                for medicine in medicines {
                    Card { key: "{medicine.id}", class: "medicine-card",
                        CardContent {
                            div { class: "item-title", "{medicine.name}" }
                            div { class: "item-meta", "{medicine.brand} · {medicine.manufacturer}" }
                            div { class: "item-row",
                                span { class: "medicine-price", "{medicine.price_label()}" }
                                Badge { variant: availability_variant(medicine.availability),
                                    "{medicine.availability.label()}"
                                }
                            }
                            Button {
                                full_width: true,
                                disabled: medicine.availability == Availability::OutOfStock,
                                onclick: move |_| {
                                    if let Err(e) = cart.write().add(medicine) {
                                        notice.set(Some(e.message));
                                    }
                                },
                                Icon { icon: LdPlus, width: 16, height: 16 }
                                "Add to Cart"
                            }
                        }
                    }
                }
            }

            DialogRoot {
                open: show_cart(),
                on_open_change: move |open: bool| show_cart.set(open),
                DialogContent {
                    DialogTitle { "Shopping Cart" }
                    if lines.is_empty() {
                        DialogDescription { "Your cart is empty." }
                    } else {
                        for line in lines.iter().cloned() {
                            div { key: "{line.medicine_id}", class: "cart-line",
                                div {
                                    div { class: "item-title", "{line.name}" }
                                    div { class: "item-meta", "{format_cents(line.unit_price_cents)} each" }
                                }
                                div { class: "cart-stepper",
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        aria_label: "Decrease quantity",
                                        onclick: move |_| cart.write().set_quantity(line.medicine_id, line.quantity.saturating_sub(1)),
                                        Icon { icon: LdMinus, width: 14, height: 14 }
                                    }
                                    span { class: "cart-quantity", "{line.quantity}" }
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        aria_label: "Increase quantity",
                                        onclick: move |_| cart.write().set_quantity(line.medicine_id, line.quantity + 1),
                                        Icon { icon: LdPlus, width: 14, height: 14 }
                                    }
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        aria_label: "Remove",
                                        onclick: move |_| cart.write().remove(line.medicine_id),
                                        Icon { icon: LdTrash2, width: 14, height: 14 }
                                    }
                                }
                            }
                        }
                        div { class: "cart-totals",
                            div { class: "item-row", span { "Subtotal" } span { "{format_cents(subtotal)}" } }
                            div { class: "item-row",
                                span { "Shipping" }
                                if shipping_fee == 0 {
                                    span { "Free" }
                                } else {
                                    span { "{format_cents(shipping_fee)}" }
                                }
                            }
                            div { class: "item-row cart-total", span { "Total" } span { "{format_cents(total)}" } }
                        }
                        Button {
                            full_width: true,
                            onclick: move |_| {
                                show_cart.set(false);
                                show_checkout.set(true);
                            },
                            "Proceed to Checkout"
                        }
                    }
                }
            }

            DialogRoot {
                open: show_checkout(),
                on_open_change: move |open: bool| show_checkout.set(open),
                DialogContent {
                    DialogTitle { "Shipping Details" }
                    DialogDescription { "Order total {format_cents(total)}" }
                    div { class: "form-field",
                        Label { html_for: "ship_address", "Address" }
                        Input {
                            id: "ship_address",
                            value: shipping.read().address.clone(),
                            on_input: move |e: FormEvent| shipping.write().address = e.value(),
                            error: shipping_errors.read().get("address").cloned(),
                        }
                    }
                    div { class: "form-field",
                        Label { html_for: "ship_city", "City" }
                        Input {
                            id: "ship_city",
                            value: shipping.read().city.clone(),
                            on_input: move |e: FormEvent| shipping.write().city = e.value(),
                            error: shipping_errors.read().get("city").cloned(),
                        }
                    }
                    div { class: "form-field",
                        Label { html_for: "ship_pincode", "Pincode" }
                        Input {
                            id: "ship_pincode",
                            value: shipping.read().pincode.clone(),
                            on_input: move |e: FormEvent| shipping.write().pincode = e.value(),
                            error: shipping_errors.read().get("pincode").cloned(),
                        }
                    }
                    div { class: "form-field",
                        Label { html_for: "ship_phone", "Phone" }
                        Input {
                            input_type: "tel",
                            id: "ship_phone",
                            value: shipping.read().phone.clone(),
                            on_input: move |e: FormEvent| shipping.write().phone = e.value(),
                            error: shipping_errors.read().get("phone").cloned(),
                        }
                    }
                    div { class: "item-actions",
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| show_checkout.set(false),
                            "Cancel"
                        }
                        Button { onclick: place_order, "Place Order" }
                    }
                }
            }
        }
    }
}

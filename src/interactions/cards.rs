use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, MouseEvent};

use super::dom;

const PRICING_LIFT: &str = "translateY(-5px)";
const FEATURE_LIFT: &str = "translateY(-8px)";

/// Animation start offset for the nth floating card.
pub fn stagger_delay_secs(index: usize) -> f64 {
    index as f64 * 0.5
}

/// Hover lift for the pricing group. Entering a card first clears every
/// card's inline transform, then lifts the hovered one unless it is the
/// featured card, which keeps its emphasis styling untouched.
pub fn wire_pricing_cards(document: &Document) {
    for card in dom::query_all(document, ".pricing-card") {
        {
            let document = document.clone();
            let card_ref = card.clone();
            let enter = Closure::wrap(Box::new(move |_: MouseEvent| {
                for other in dom::query_all(&document, ".pricing-card") {
                    let _ = other.style().remove_property("transform");
                }
                if !card_ref.class_list().contains("featured") {
                    let _ = card_ref.style().set_property("transform", PRICING_LIFT);
                }
            }) as Box<dyn FnMut(MouseEvent)>);
            let _ =
                card.add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref());
            enter.forget();
        }

        let card_ref = card.clone();
        let leave = Closure::wrap(Box::new(move |_: MouseEvent| {
            if !card_ref.class_list().contains("featured") {
                let _ = card_ref.style().remove_property("transform");
            }
        }) as Box<dyn FnMut(MouseEvent)>);
        let _ = card.add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref());
        leave.forget();
    }
}

/// Feature cards lift on hover with no group rule.
pub fn wire_feature_cards(document: &Document) {
    for card in dom::query_all(document, ".feature-card") {
        {
            let card_ref = card.clone();
            let enter = Closure::wrap(Box::new(move |_: MouseEvent| {
                let _ = card_ref.style().set_property("transform", FEATURE_LIFT);
            }) as Box<dyn FnMut(MouseEvent)>);
            let _ =
                card.add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref());
            enter.forget();
        }

        let card_ref = card.clone();
        let leave = Closure::wrap(Box::new(move |_: MouseEvent| {
            let _ = card_ref.style().remove_property("transform");
        }) as Box<dyn FnMut(MouseEvent)>);
        let _ = card.add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref());
        leave.forget();
    }
}

/// Gives each floating hero card an increasing animation-delay so the group
/// drifts out of phase. Runs once at startup.
pub fn wire_floating_cards(document: &Document) {
    for (index, card) in dom::query_all(document, ".floating-card")
        .into_iter()
        .enumerate()
    {
        let _ = card
            .style()
            .set_property("animation-delay", &format!("{}s", stagger_delay_secs(index)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floating_cards_step_by_half_a_second() {
        let delays: Vec<f64> = (0..4).map(stagger_delay_secs).collect();
        assert_eq!(delays, vec![0.0, 0.5, 1.0, 1.5]);
    }

    #[test]
    fn first_card_starts_immediately() {
        assert_eq!(stagger_delay_secs(0), 0.0);
    }
}

use haulbot_core::Intent;

use crate::message::Channel;

/// Fixed acknowledgement per intent. These never carry a price; pricing
/// is a separate explicit request once the adapter has structured fields.
pub fn acknowledgement(intent: Intent, channel: Channel) -> &'static str {
    match channel {
        Channel::Web => web_acknowledgement(intent),
        Channel::Whatsapp => whatsapp_prompt(intent),
    }
}

fn web_acknowledgement(intent: Intent) -> &'static str {
    match intent {
        Intent::Quote => {
            "Please share origin, destination, weight (kg), and vehicle (pickup/14ft/17ft/22ft)."
        }
        Intent::Track => "Share your LR/Booking ID and I'll fetch live status.",
        Intent::Booking => "Great! Your pickup city and date? Also a contact number.",
        Intent::Faq => {
            "We operate from Nigha across UP & Bihar. 14ft can carry ~3.5T. Pickup 9am–7pm. \
             Insurance available. Need GST + invoice + eWay bill."
        }
        Intent::Handoff => "Connecting you to an agent… Please share your name & number.",
        Intent::Fallback => "I can help with Quotes, Booking, and Tracking. What do you need?",
    }
}

/// Terse prompts for keyboard-hostile messaging channels.
fn whatsapp_prompt(intent: Intent) -> &'static str {
    match intent {
        Intent::Quote => "Send: quote Nigha->Varanasi 1200kg 14ft",
        Intent::Track => "Send your LR/Booking ID",
        _ => "Reply with: quote / track / booking / help",
    }
}

#[cfg(test)]
mod tests {
    use haulbot_core::Intent;

    use crate::message::Channel;

    use super::acknowledgement;

    #[test]
    fn web_replies_are_distinct_per_intent() {
        let intents = [
            Intent::Quote,
            Intent::Track,
            Intent::Booking,
            Intent::Faq,
            Intent::Handoff,
            Intent::Fallback,
        ];
        let mut seen = std::collections::BTreeSet::new();
        for intent in intents {
            assert!(seen.insert(acknowledgement(intent, Channel::Web)), "duplicate for {intent}");
        }
    }

    #[test]
    fn whatsapp_collapses_non_actionable_intents_to_a_nudge() {
        let nudge = acknowledgement(Intent::Fallback, Channel::Whatsapp);
        assert_eq!(acknowledgement(Intent::Booking, Channel::Whatsapp), nudge);
        assert_eq!(acknowledgement(Intent::Faq, Channel::Whatsapp), nudge);
        assert_eq!(acknowledgement(Intent::Handoff, Channel::Whatsapp), nudge);
        assert_ne!(acknowledgement(Intent::Quote, Channel::Whatsapp), nudge);
        assert_ne!(acknowledgement(Intent::Track, Channel::Whatsapp), nudge);
    }
}

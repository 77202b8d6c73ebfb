//! Locally computed replies for when the completion provider is missing or
//! down. The caller never sees the difference between "no key" and "call
//! broke" — both land here.

pub const FEVER_FALLBACK: &str = "Rest well, stay hydrated, and monitor your temperature. If fever persists over 48 hours or worsens, please consult a doctor immediately.";

pub const PAIN_FALLBACK: &str = "Chest pain can be serious. Stop any physical activity immediately and seek emergency medical care if pain is severe or persistent.";

pub const SKIN_FALLBACK: &str = "Keep the affected area clean and dry. Avoid scratching or irritants. See a dermatologist if the rash spreads or shows signs of infection.";

pub const GENERIC_FALLBACK: &str = "I need more specific details about your symptoms. Meanwhile, rest well, stay hydrated, and consult a healthcare provider if symptoms persist or worsen.";

pub const NUTRITION_FALLBACK: &str = "I'm unable to generate a detailed nutrition plan right now. Please try again later or consult with a registered dietitian for personalized meal planning based on your specific health needs and dietary preferences.";

/// Pick a canned reply by coarse keyword matching on the user's message.
pub fn fallback_reply(message: &str, is_nutrition: bool) -> &'static str {
    if is_nutrition {
        return NUTRITION_FALLBACK;
    }

    let m = message.to_lowercase();
    if m.contains("fever") || m.contains("temperature") {
        FEVER_FALLBACK
    } else if m.contains("pain") || m.contains("ache") || m.contains("chest") {
        PAIN_FALLBACK
    } else if m.contains("rash") || m.contains("skin") || m.contains("itch") {
        SKIN_FALLBACK
    } else {
        GENERIC_FALLBACK
    }
}

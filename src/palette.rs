//! Provider/model pill colors. Each provider has a base RGB; models get a
//! deterministic lighter/darker variant of their provider's base so badges
//! for sibling models stay related but distinguishable.

pub type Rgb = [u8; 3];

const FALLBACK_RGB: Rgb = [100, 116, 139];

const PROVIDER_RGB: &[(&str, Rgb)] = &[
    ("OpenAI", [16, 163, 127]),
    ("Google", [251, 191, 36]),
    ("Anthropic", [248, 113, 113]),
    ("DeepSeek", [59, 130, 246]),
    ("Mistral AI", [251, 146, 60]),
    ("xAI", [217, 70, 239]),
    ("Alibaba", [139, 92, 246]),
    ("Moonshot AI", [14, 165, 233]),
    ("Perplexity", [100, 116, 139]),
    ("Meta", [148, 163, 184]),
];

const MODEL_VARIANTS: [f64; 9] = [-0.16, -0.12, -0.08, -0.04, 0.0, 0.04, 0.08, 0.12, 0.16];

pub fn provider_rgb(provider: &str) -> Rgb {
    let provider = provider.trim();
    PROVIDER_RGB
        .iter()
        .find(|(name, _)| *name == provider)
        .map(|(_, rgb)| *rgb)
        .unwrap_or(FALLBACK_RGB)
}

pub fn infer_provider(model: &str) -> &'static str {
    let name = model.trim().to_lowercase();
    if name.is_empty() {
        return "Unknown";
    }

    let contains_any = |needles: &[&str]| needles.iter().any(|needle| name.contains(needle));

    if contains_any(&["gpt", "chatgpt", "o1", "o3"]) {
        "OpenAI"
    } else if name.contains("claude") {
        "Anthropic"
    } else if contains_any(&["gemini", "gemma"]) {
        "Google"
    } else if name.contains("deepseek") {
        "DeepSeek"
    } else if name.contains("mistral") {
        "Mistral AI"
    } else if name.contains("grok") {
        "xAI"
    } else if name.contains("qwen") {
        "Alibaba"
    } else if name.contains("kimi") {
        "Moonshot AI"
    } else if name.contains("perplexity") {
        "Perplexity"
    } else if name.contains("llama") {
        "Meta"
    } else {
        "Other"
    }
}

/// Provider base color shifted by a variant picked from the model name's
/// FNV-1a hash, mixed toward white (positive) or black (negative).
pub fn model_rgb(model: &str) -> Rgb {
    let base = provider_rgb(infer_provider(model));
    let key = model.trim().to_lowercase();
    let variant = MODEL_VARIANTS[(fnv1a(&key) as usize) % MODEL_VARIANTS.len()];
    if variant == 0.0 {
        return base;
    }

    let mix: f64 = if variant > 0.0 { 255.0 } else { 0.0 };
    let t = variant.abs();
    let channel = |c: u8| (f64::from(c) * (1.0 - t) + mix * t).round() as u8;
    [channel(base[0]), channel(base[1]), channel(base[2])]
}

pub fn css_triplet(rgb: Rgb) -> String {
    format!("{} {} {}", rgb[0], rgb[1], rgb[2])
}

/// WCAG relative-luminance cutoff for picking a readable text color on a
/// solid pill background.
pub fn readable_text_color(rgb: Rgb) -> &'static str {
    if relative_luminance(rgb) > 0.6 {
        "#0f172a"
    } else {
        "#ffffff"
    }
}

fn relative_luminance(rgb: Rgb) -> f64 {
    let linear = |c: u8| {
        let c = f64::from(c) / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    0.2126 * linear(rgb[0]) + 0.7152 * linear(rgb[1]) + 0.0722 * linear(rgb[2])
}

fn fnv1a(text: &str) -> u32 {
    let mut hash: u32 = 0x811c9dc5;
    for byte in text.bytes() {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(0x0100_0193);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fnv1a_known_vectors() {
        assert_eq!(fnv1a(""), 0x811c_9dc5);
        assert_eq!(fnv1a("a"), 0xe40c_292c);
    }

    #[test]
    fn provider_inference_by_substring() {
        assert_eq!(infer_provider("ChatGPT 5 Thinking"), "OpenAI");
        assert_eq!(infer_provider("Claude Opus"), "Anthropic");
        assert_eq!(infer_provider("gemini-2.5-pro"), "Google");
        assert_eq!(infer_provider("Grok 4"), "xAI");
        assert_eq!(infer_provider("Qwen3"), "Alibaba");
        assert_eq!(infer_provider("Llama 4"), "Meta");
        assert_eq!(infer_provider("SomethingElse"), "Other");
        assert_eq!(infer_provider("   "), "Unknown");
    }

    #[test]
    fn unknown_provider_uses_fallback_rgb() {
        assert_eq!(provider_rgb("Unknown"), FALLBACK_RGB);
        assert_eq!(provider_rgb("Other"), FALLBACK_RGB);
        assert_eq!(provider_rgb("OpenAI"), [16, 163, 127]);
    }

    #[test]
    fn model_variant_is_deterministic_and_case_insensitive() {
        assert_eq!(model_rgb("Claude Opus"), model_rgb("claude opus"));
        assert_eq!(model_rgb("gpt-5"), model_rgb("gpt-5"));
    }

    #[test]
    fn readable_text_flips_on_luminance() {
        assert_eq!(readable_text_color([255, 255, 255]), "#0f172a");
        assert_eq!(readable_text_color([0, 0, 0]), "#ffffff");
        assert_eq!(readable_text_color([16, 163, 127]), "#ffffff");
    }
}

//! Static catalogs served read-only to the frontend: the seven icon styles
//! with their prompt fragments, the color swatches, and the loading-message
//! rotation shown while a request is in flight.

use serde::Serialize;

use crate::models::IconStyle;

#[derive(Debug, Clone, Serialize)]
pub struct IconStylePreset {
    pub id: IconStyle,
    pub label: &'static str,
    pub prompt: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColorPreset {
    pub name: &'static str,
    pub value: &'static str,
}

pub const ICON_STYLES: [IconStylePreset; 7] = [
    IconStylePreset {
        id: IconStyle::Minimalist,
        label: "Minimalist",
        prompt: "Clean, simple, minimalist design with bold lines and limited elements.",
    },
    IconStylePreset {
        id: IconStyle::ThreeD,
        label: "3D",
        prompt: "Modern 3D render, depth, shadows, high detail, volumetric lighting.",
    },
    IconStylePreset {
        id: IconStyle::Flat,
        label: "Flat",
        prompt: "Modern flat design, 2D graphics, clean aesthetics, vector style.",
    },
    IconStylePreset {
        id: IconStyle::Gradient,
        label: "Gradient",
        prompt: "Vibrant mesh gradients, smooth transitions, modern color palette.",
    },
    IconStylePreset {
        id: IconStyle::Glassmorphism,
        label: "Glassmorphism",
        prompt: "Frosted glass effect, translucent layers, soft background blur.",
    },
    IconStylePreset {
        id: IconStyle::Abstract,
        label: "Abstract",
        prompt: "Creative abstract shapes, conceptual representation, artistic flare.",
    },
    IconStylePreset {
        id: IconStyle::Skeuomorphic,
        label: "Skeuomorphic",
        prompt: "Realistic textures, mimic real-world materials, high detail.",
    },
];

pub const COLOR_PRESETS: [ColorPreset; 8] = [
    ColorPreset { name: "Royal Blue", value: "#2563eb" },
    ColorPreset { name: "Modern Purple", value: "#8b5cf6" },
    ColorPreset { name: "Emerald Green", value: "#10b981" },
    ColorPreset { name: "Bright Orange", value: "#f59e0b" },
    ColorPreset { name: "Elegant Pink", value: "#ec4899" },
    ColorPreset { name: "Charcoal Gray", value: "#374151" },
    ColorPreset { name: "Berry Red", value: "#ef4444" },
    ColorPreset { name: "Deep Black", value: "#000000" },
];

/// Rotated every 2 seconds while a generation request is outstanding.
pub const LOADING_MESSAGES: [&str; 5] = [
    "Analyzing your app idea...",
    "Sending the request to the generator...",
    "Mixing colors and styles...",
    "Putting the finishing touches on the icon...",
    "Preparing a high quality PNG file...",
];

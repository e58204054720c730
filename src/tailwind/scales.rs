//! Fixed scale tables mapping literal CSS values to utility-scale tokens.
//!
//! Process-wide and immutable. Lookups are exact string matches on the
//! resolved pixel (or keyword) value; anything missing falls back to an
//! arbitrary-value token at the call site.

/// Spacing scale: resolved pixel value -> spacing step.
pub fn spacing_token(value: &str) -> Option<&'static str> {
    Some(match value {
        "0px" => "0",
        "1px" => "px",
        "2px" => "0.5",
        "4px" => "1",
        "6px" => "1.5",
        "8px" => "2",
        "10px" => "2.5",
        "12px" => "3",
        "14px" => "3.5",
        "16px" => "4",
        "20px" => "5",
        "24px" => "6",
        "28px" => "7",
        "32px" => "8",
        "36px" => "9",
        "40px" => "10",
        "44px" => "11",
        "48px" => "12",
        "56px" => "14",
        "64px" => "16",
        "80px" => "20",
        "96px" => "24",
        "112px" => "28",
        "128px" => "32",
        "144px" => "36",
        "160px" => "40",
        "176px" => "44",
        "192px" => "48",
        "208px" => "52",
        "224px" => "56",
        "240px" => "60",
        "256px" => "64",
        "288px" => "72",
        "320px" => "80",
        "384px" => "96",
        _ => return None,
    })
}

pub fn font_size_token(value: &str) -> Option<&'static str> {
    Some(match value {
        "12px" => "xs",
        "14px" => "sm",
        "16px" => "base",
        "18px" => "lg",
        "20px" => "xl",
        "24px" => "2xl",
        "30px" => "3xl",
        "36px" => "4xl",
        "48px" => "5xl",
        "60px" => "6xl",
        "72px" => "7xl",
        "96px" => "8xl",
        "128px" => "9xl",
        _ => return None,
    })
}

pub fn font_weight_token(value: &str) -> Option<&'static str> {
    Some(match value {
        "100" => "thin",
        "200" => "extralight",
        "300" => "light",
        "400" => "normal",
        "500" => "medium",
        "600" => "semibold",
        "700" => "bold",
        "800" => "extrabold",
        "900" => "black",
        _ => return None,
    })
}

/// Border-radius scale. The bare `rounded` token has no suffix, signalled
/// here by the sentinel `"DEFAULT"`.
pub fn radius_token(value: &str) -> Option<&'static str> {
    Some(match value {
        "0px" => "none",
        "2px" => "sm",
        "4px" => "DEFAULT",
        "6px" => "md",
        "8px" => "lg",
        "12px" => "xl",
        "16px" => "2xl",
        "24px" => "3xl",
        "9999px" | "50%" => "full",
        _ => return None,
    })
}

pub fn line_height_token(value: &str) -> Option<&'static str> {
    Some(match value {
        "1" => "none",
        "1.25" => "tight",
        "1.375" => "snug",
        "1.5" => "normal",
        "1.625" => "relaxed",
        "2" => "loose",
        "12px" => "3",
        "16px" => "4",
        "20px" => "5",
        "24px" => "6",
        "28px" => "7",
        "32px" => "8",
        "36px" => "9",
        "40px" => "10",
        _ => return None,
    })
}

pub fn opacity_token(value: &str) -> Option<&'static str> {
    Some(match value {
        "0" => "0",
        "0.05" => "5",
        "0.1" => "10",
        "0.15" => "15",
        "0.2" => "20",
        "0.25" => "25",
        "0.3" => "30",
        "0.4" => "40",
        "0.5" => "50",
        "0.6" => "60",
        "0.7" => "70",
        "0.75" => "75",
        "0.8" => "80",
        "0.9" => "90",
        "0.95" => "95",
        "1" => "100",
        _ => return None,
    })
}

pub fn width_token(value: &str) -> Option<&'static str> {
    Some(match value {
        "100%" => "full",
        "100vw" => "screen",
        "auto" => "auto",
        "fit-content" => "fit",
        "min-content" => "min",
        "max-content" => "max",
        "50%" => "1/2",
        "33.3333%" => "1/3",
        "66.6667%" => "2/3",
        "25%" => "1/4",
        "75%" => "3/4",
        _ => return None,
    })
}

pub fn height_token(value: &str) -> Option<&'static str> {
    Some(match value {
        "100%" => "full",
        "100vh" => "screen",
        "auto" => "auto",
        "fit-content" => "fit",
        "min-content" => "min",
        "max-content" => "max",
        "50%" => "1/2",
        _ => return None,
    })
}

pub fn max_width_token(value: &str) -> Option<&'static str> {
    Some(match value {
        "none" => "none",
        "100%" => "full",
        "320px" => "xs",
        "384px" => "sm",
        "448px" => "md",
        "512px" => "lg",
        "576px" => "xl",
        "672px" => "2xl",
        "768px" => "3xl",
        "896px" => "4xl",
        "1024px" => "5xl",
        "1152px" => "6xl",
        "1280px" => "7xl",
        "65ch" => "prose",
        _ => return None,
    })
}

/// Named palette: whitespace-normalized `rgb()` value -> color name.
pub fn palette_color(value: &str) -> Option<&'static str> {
    Some(match value {
        "rgb(255, 255, 255)" => "white",
        "rgb(0, 0, 0)" => "black",
        "transparent" | "rgba(0, 0, 0, 0)" => "transparent",
        // Gray
        "rgb(249, 250, 251)" => "gray-50",
        "rgb(243, 244, 246)" => "gray-100",
        "rgb(229, 231, 235)" => "gray-200",
        "rgb(209, 213, 219)" => "gray-300",
        "rgb(156, 163, 175)" => "gray-400",
        "rgb(107, 114, 128)" => "gray-500",
        "rgb(75, 85, 99)" => "gray-600",
        "rgb(55, 65, 81)" => "gray-700",
        "rgb(31, 41, 55)" => "gray-800",
        "rgb(17, 24, 39)" => "gray-900",
        // Slate
        "rgb(248, 250, 252)" => "slate-50",
        "rgb(241, 245, 249)" => "slate-100",
        "rgb(226, 232, 240)" => "slate-200",
        "rgb(100, 116, 139)" => "slate-500",
        "rgb(51, 65, 85)" => "slate-700",
        "rgb(15, 23, 42)" => "slate-900",
        // Red
        "rgb(254, 226, 226)" => "red-100",
        "rgb(248, 113, 113)" => "red-400",
        "rgb(239, 68, 68)" => "red-500",
        "rgb(220, 38, 38)" => "red-600",
        "rgb(185, 28, 28)" => "red-700",
        // Orange / yellow
        "rgb(249, 115, 22)" => "orange-500",
        "rgb(234, 88, 12)" => "orange-600",
        "rgb(250, 204, 21)" => "yellow-400",
        "rgb(234, 179, 8)" => "yellow-500",
        // Green
        "rgb(220, 252, 231)" => "green-100",
        "rgb(74, 222, 128)" => "green-400",
        "rgb(34, 197, 94)" => "green-500",
        "rgb(22, 163, 74)" => "green-600",
        "rgb(21, 128, 61)" => "green-700",
        // Blue
        "rgb(219, 234, 254)" => "blue-100",
        "rgb(96, 165, 250)" => "blue-400",
        "rgb(59, 130, 246)" => "blue-500",
        "rgb(37, 99, 235)" => "blue-600",
        "rgb(29, 78, 216)" => "blue-700",
        // Indigo / purple / pink
        "rgb(99, 102, 241)" => "indigo-500",
        "rgb(79, 70, 229)" => "indigo-600",
        "rgb(168, 85, 247)" => "purple-500",
        "rgb(147, 51, 234)" => "purple-600",
        "rgb(236, 72, 153)" => "pink-500",
        "rgb(219, 39, 119)" => "pink-600",
        _ => return None,
    })
}

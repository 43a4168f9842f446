//! 设计令牌表
//!
//! 所有样式值集中在这里声明，分两层：
//! - [`ROOT_DEFAULTS`]：每个 CSS 自定义属性在 `:root` 下的默认值
//! - 各个刻度表：按用途（颜色、间距、圆角等）引用自定义属性
//!
//! 刻度表里只允许引用 [`ROOT_DEFAULTS`] 中声明过的属性，
//! 一致性由 [`super::validate`] 在启动时检查。

/// `:root` 下每个自定义属性的默认值
pub const ROOT_DEFAULTS: &[(&str, &str)] = &[
    ("--background", "#0c0c0e"),
    ("--foreground", "#d6d6d6"),
    ("--black", "#1c1c1f"),
    ("--bright-black", "#4f4f55"),
    ("--darker-black", "#131316"),
    ("--darkest-black", "#09090b"),
    ("--gray", "#7f7f87"),
    ("--bright-gray", "#b3b3ba"),
    ("--white", "#d8d8d8"),
    ("--bright-white", "#ffffff"),
    ("--red", "#cc4a4a"),
    ("--bright-red", "#ff6b6b"),
    ("--orange", "#d98f3e"),
    ("--yellow", "#c9b458"),
    ("--bright-yellow", "#ffe066"),
    ("--green", "#5d9e63"),
    ("--bright-green", "#8ce99a"),
    ("--cyan", "#4aa3a3"),
    ("--bright-cyan", "#66d9e8"),
    ("--blue", "#4a7acc"),
    ("--bright-blue", "#74c0fc"),
    ("--purple", "#8a63b8"),
    ("--bright-purple", "#b197fc"),
    ("--brown", "#8a6d4f"),
    ("--border-thickness", "3pt"),
    ("--border-radius", "8pt"),
    ("--transition-duration", "150ms"),
    ("--transition-easing", "ease-in-out"),
];

/// 颜色刻度
pub const COLORS: &[(&str, &str)] = &[
    ("transparent", "transparent"),
    ("background", "var(--background)"),
    ("black", "var(--black)"),
    ("black-bright", "var(--bright-black)"),
    ("black-darker", "var(--darker-black)"),
    ("black-darkest", "var(--darkest-black)"),
    ("gray", "var(--gray)"),
    ("gray-bright", "var(--bright-gray)"),
    ("foreground", "var(--foreground)"),
    ("white", "var(--white)"),
    ("white-bright", "var(--bright-white)"),
    ("red", "var(--red)"),
    ("red-bright", "var(--bright-red)"),
    ("orange", "var(--orange)"),
    ("yellow", "var(--yellow)"),
    ("yellow-bright", "var(--bright-yellow)"),
    ("green", "var(--green)"),
    ("green-bright", "var(--bright-green)"),
    ("cyan", "var(--cyan)"),
    ("cyan-bright", "var(--bright-cyan)"),
    ("blue", "var(--blue)"),
    ("blue-bright", "var(--bright-blue)"),
    ("purple", "var(--purple)"),
    ("purple-bright", "var(--bright-purple)"),
    ("brown", "var(--brown)"),
];

/// 宽高比刻度
pub const ASPECT_RATIOS: &[(&str, &str)] = &[
    ("square", "1 / 1"),
    ("2/1", "2 / 1"),
    ("3/2", "3 / 2"),
];

/// 外边距刻度
pub const MARGINS: &[(&str, &str)] = &[
    ("0", "0"),
    ("auto", "auto"),
    ("border", "calc(var(--border-thickness) - 1pt)"),
    ("border-plus", "calc(var(--border-thickness) + 1pt)"),
    ("half", "1rem"),
    ("default", "2rem"),
    ("double", "4rem"),
];

/// 间距刻度，内边距和 gap 共用
pub const SPACING: &[(&str, &str)] = &[
    ("0", "0"),
    ("border", "calc(var(--border-thickness) - 1pt)"),
    ("half", "1rem"),
    ("default", "2rem"),
    ("double", "4rem"),
];

/// 宽度刻度
pub const WIDTHS: &[(&str, &str)] = &[
    ("border", "var(--border-thickness)"),
    ("spacing-half", "1rem"),
    ("spacing", "2rem"),
    ("spacing-double", "4rem"),
    ("1/3", "33.333333%"),
    ("2/3", "66.666667%"),
    ("full", "100%"),
];

/// 高度刻度，和宽度保持一致
pub const HEIGHTS: &[(&str, &str)] = WIDTHS;

/// 默认边框颜色
pub const BORDER_COLOR: &str = "var(--darkest-black)";

/// 默认边框粗细
pub const BORDER_WIDTH: &str = "var(--border-thickness)";

/// 默认圆角
pub const BORDER_RADIUS: &str = "var(--border-radius)";

/// 默认过渡时长
pub const TRANSITION_DURATION: &str = "var(--transition-duration)";

/// 默认过渡曲线
pub const TRANSITION_EASING: &str = "var(--transition-easing)";

/// 排版插件的 prose 变量映射，挂在 `.prose-white` 下
pub const TYPOGRAPHY_PROSE: &[(&str, &str)] = &[
    ("--tw-prose-body", "var(--bright-white)"),
    ("--tw-prose-headings", "var(--bright-white)"),
    ("--tw-prose-lead", "var(--bright-white)"),
    ("--tw-prose-links", "var(--bright-white)"),
    ("--tw-prose-bold", "var(--bright-white)"),
    ("--tw-prose-counters", "var(--bright-white)"),
    ("--tw-prose-bullets", "var(--bright-white)"),
    ("--tw-prose-hr", "var(--darker-black)"),
    ("--tw-prose-quotes", "var(--white)"),
    ("--tw-prose-quote-borders", "var(--darker-black)"),
    ("--tw-prose-captions", "var(--white)"),
    ("--tw-prose-kbd", "var(--white)"),
    ("--tw-prose-kbd-shadows", "var(--darkest-black)"),
    ("--tw-prose-code", "var(--white)"),
    ("--tw-prose-pre-code", "var(--white)"),
    ("--tw-prose-pre-bg", "var(--white)"),
    ("--tw-prose-th-borders", "var(--darkest-black)"),
    ("--tw-prose-td-borders", "var(--darkest-black)"),
];

//! 设计令牌模块
//!
//! 把 [`tokens`] 里的声明编译成一张样式表，通过 `/theme.css` 下发给模板层。
//! 模板层只使用这里生成的类名和自定义属性，不自己写样式值。

use std::collections::HashSet;
use std::fmt::Write;

pub mod tokens;

/// 校验令牌表的内部一致性
///
/// 检查两件事：
/// - 刻度表里引用的每个自定义属性都在 [`tokens::ROOT_DEFAULTS`] 中有默认值
/// - 默认值表中没有重复声明
///
/// 返回的列表是所有问题的描述，为空表示一致
pub fn validate() -> Result<(), Vec<String>> {
    let mut issues = Vec::new();

    let mut defined = HashSet::new();
    for (name, _) in tokens::ROOT_DEFAULTS {
        if !defined.insert(*name) {
            issues.push(format!("重复声明的默认值: {name}"));
        }
    }

    for value in all_scale_values() {
        for var in referenced_vars(value) {
            let issue = format!("缺少默认值: {var}");
            if !defined.contains(var) && !issues.contains(&issue) {
                issues.push(issue);
            }
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

/// 生成完整的令牌样式表
pub fn stylesheet() -> String {
    let mut css = String::new();

    css.push_str(":root {\n");
    for (name, value) in tokens::ROOT_DEFAULTS {
        let _ = writeln!(css, "  {name}: {value};");
    }
    css.push_str("}\n");

    for (name, value) in tokens::COLORS {
        let _ = writeln!(css, "{} {{ color: {value}; }}", class_name("text", name));
        let _ = writeln!(
            css,
            "{} {{ background-color: {value}; }}",
            class_name("bg", name)
        );
        let _ = writeln!(
            css,
            "{} {{ border-color: {value}; }}",
            class_name("border", name)
        );
    }

    for (name, value) in tokens::ASPECT_RATIOS {
        let _ = writeln!(
            css,
            "{} {{ aspect-ratio: {value}; }}",
            class_name("aspect", name)
        );
    }

    for (name, value) in tokens::MARGINS {
        let _ = writeln!(css, "{} {{ margin: {value}; }}", class_name("m", name));
    }

    for (name, value) in tokens::SPACING {
        let _ = writeln!(css, "{} {{ padding: {value}; }}", class_name("p", name));
        let _ = writeln!(css, "{} {{ gap: {value}; }}", class_name("gap", name));
    }

    for (name, value) in tokens::WIDTHS {
        let _ = writeln!(css, "{} {{ width: {value}; }}", class_name("w", name));
    }

    for (name, value) in tokens::HEIGHTS {
        let _ = writeln!(css, "{} {{ height: {value}; }}", class_name("h", name));
    }

    let _ = writeln!(
        css,
        ".border {{ border-style: solid; border-width: {}; border-color: {}; }}",
        tokens::BORDER_WIDTH,
        tokens::BORDER_COLOR,
    );
    let _ = writeln!(
        css,
        ".rounded {{ border-radius: {}; }}",
        tokens::BORDER_RADIUS
    );
    let _ = writeln!(
        css,
        ".transition {{ transition-duration: {}; transition-timing-function: {}; }}",
        tokens::TRANSITION_DURATION,
        tokens::TRANSITION_EASING,
    );

    css.push_str(".prose-white {\n");
    for (name, value) in tokens::TYPOGRAPHY_PROSE {
        let _ = writeln!(css, "  {name}: {value};");
    }
    css.push_str("}\n");

    css
}

/// 由前缀和令牌名生成类选择器
///
/// `default` 令牌对应无后缀的类名，名字里的 `/` 需要按 CSS 规则转义
fn class_name(prefix: &str, token: &str) -> String {
    if token == "default" {
        format!(".{prefix}")
    } else {
        format!(".{prefix}-{}", token.replace('/', "\\/"))
    }
}

/// 提取一个样式值里引用的全部自定义属性名
fn referenced_vars(value: &str) -> Vec<&str> {
    let mut vars = Vec::new();
    let mut rest = value;
    while let Some(pos) = rest.find("var(") {
        let tail = &rest[pos + 4..];
        let end = tail.find([',', ')']).unwrap_or(tail.len());
        vars.push(tail[..end].trim());
        rest = &tail[end..];
    }
    vars
}

/// 所有刻度表和默认样式里出现的样式值
fn all_scale_values() -> impl Iterator<Item = &'static str> {
    tokens::COLORS
        .iter()
        .chain(tokens::ASPECT_RATIOS)
        .chain(tokens::MARGINS)
        .chain(tokens::SPACING)
        .chain(tokens::WIDTHS)
        .chain(tokens::HEIGHTS)
        .chain(tokens::TYPOGRAPHY_PROSE)
        .map(|(_, value)| *value)
        .chain([
            tokens::BORDER_COLOR,
            tokens::BORDER_WIDTH,
            tokens::BORDER_RADIUS,
            tokens::TRANSITION_DURATION,
            tokens::TRANSITION_EASING,
        ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_consistent() {
        // 每个被引用的自定义属性都必须有默认值
        validate().unwrap();
    }

    #[test]
    fn test_referenced_vars() {
        assert_eq!(referenced_vars("var(--black)"), vec!["--black"]);
        assert_eq!(
            referenced_vars("calc(var(--border-thickness) - 1pt)"),
            vec!["--border-thickness"]
        );
        assert_eq!(
            referenced_vars("var(--a, red) var(--b)"),
            vec!["--a", "--b"]
        );
        assert!(referenced_vars("1rem").is_empty());
    }

    #[test]
    fn test_class_name_escaping() {
        assert_eq!(class_name("aspect", "2/1"), ".aspect-2\\/1");
        assert_eq!(class_name("m", "default"), ".m");
        assert_eq!(class_name("text", "red-bright"), ".text-red-bright");
    }

    #[test]
    fn test_stylesheet_structure() {
        let css = stylesheet();

        assert!(css.starts_with(":root {"));
        assert!(css.contains("--background: "));
        assert!(css.contains(".text-red { color: var(--red); }"));
        assert!(css.contains(".bg-background { background-color: var(--background); }"));
        assert!(css.contains(".m { margin: 2rem; }"));
        assert!(css.contains(".w-1\\/3 { width: 33.333333%; }"));
        assert!(css.contains(".prose-white {"));
        assert!(css.contains("--tw-prose-body: var(--bright-white);"));
    }

    #[test]
    fn test_stylesheet_resolves_every_reference() {
        // 生成的样式表不应该引用任何没有默认值的属性
        let css = stylesheet();
        let defined: std::collections::HashSet<&str> =
            tokens::ROOT_DEFAULTS.iter().map(|(name, _)| *name).collect();

        for var in referenced_vars(&css) {
            assert!(defined.contains(var), "未定义的自定义属性: {var}");
        }
    }
}

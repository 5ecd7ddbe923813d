//! 文本规范化 - 业务能力层
//!
//! 把从版面中抽出的原始文本整理成适合存储和展示的形式。
//! 纯函数，对已规范化的文本再次调用不会产生任何变化。
//!
//! 处理顺序：
//! 1. 不可见空白（NBSP、零宽字符、行/段分隔符、BOM）替换为普通空格，去掉控制字符
//! 2. NFKC 兼容组合（上下标数字先折叠为 `^n` / `_n`，避免 `x²` 变成 `x2`）
//! 3. 数学符号按输出形式翻译
//! 4. 压缩幂 `a ^ b`、下标 `_ n`
//! 5. 压缩分数 `a / b`
//! 6. 压缩科学计数法 `a × 10 ^ n`
//! 7. 连续空白合并为一个空格
//! 8. 清除残留控制字符
//! 9. 去掉首尾空白

use phf::phf_map;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// 数学符号输出形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotationStyle {
    /// 保留 Unicode 符号
    #[default]
    Symbol,
    /// 输出 LaTeX 命令
    Latex,
}

impl NotationStyle {
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "symbol" | "unicode" => Some(NotationStyle::Symbol),
            "latex" | "tex" => Some(NotationStyle::Latex),
            _ => None,
        }
    }
}

/// 符号表：原符号 => (符号形式, LaTeX 形式)
///
/// 键均为 NFKC 之后的字符
static SYMBOL_TABLE: phf::Map<&'static str, (&'static str, &'static str)> = phf_map! {
    "×" => ("×", "\\times "),
    "✕" => ("×", "\\times "),
    "÷" => ("÷", "\\div "),
    "−" => ("-", "-"),
    "∗" => ("*", "*"),
    "⁄" => ("/", "/"),
    "·" => ("·", "\\cdot "),
    "⋅" => ("·", "\\cdot "),
    "±" => ("±", "\\pm "),
    "≤" => ("≤", "\\leq "),
    "≥" => ("≥", "\\geq "),
    "≠" => ("≠", "\\neq "),
    "≈" => ("≈", "\\approx "),
    "∝" => ("∝", "\\propto "),
    "∞" => ("∞", "\\infty "),
    "√" => ("√", "\\sqrt "),
    "∫" => ("∫", "\\int "),
    "∑" => ("∑", "\\sum "),
    "∂" => ("∂", "\\partial "),
    "∈" => ("∈", "\\in "),
    "→" => ("→", "\\rightarrow "),
    "°" => ("°", "^\\circ "),
    "∆" => ("Δ", "\\Delta "),
    "Δ" => ("Δ", "\\Delta "),
    "π" => ("π", "\\pi "),
    "θ" => ("θ", "\\theta "),
    "α" => ("α", "\\alpha "),
    "β" => ("β", "\\beta "),
    "γ" => ("γ", "\\gamma "),
    "λ" => ("λ", "\\lambda "),
    "μ" => ("μ", "\\mu "),
    "ω" => ("ω", "\\omega "),
    "Ω" => ("Ω", "\\Omega "),
};

/// 整条幂链 `2 ^ 3 ^ 4`，一次匹配以免相邻运算被漏掉
static EXPONENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\s*\^\s*\d+)+").expect("valid exponent regex"));

static SUBSCRIPT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_\s*(\d+)").expect("valid subscript regex"));

static FRACTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\s*/\s*\d+)+").expect("valid fraction regex"));

static SCIENTIFIC_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)\s*(?:×|\\times|x)\s*10\s*\^\s*(-?\d+)")
        .expect("valid scientific notation regex")
});

static WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// 规范化一段文本
pub fn normalize(text: &str, style: NotationStyle) -> String {
    let spaced = replace_invisible(text);
    let composed = compose(&spaced);
    let translated = translate_symbols(&composed, style);

    let compact = EXPONENT_REGEX.replace_all(&translated, strip_spaces);
    let compact = SUBSCRIPT_REGEX.replace_all(&compact, "_${1}");
    let compact = FRACTION_REGEX.replace_all(&compact, strip_spaces);
    let compact = match style {
        NotationStyle::Symbol => SCIENTIFIC_REGEX.replace_all(&compact, "${1}×10^${2}"),
        NotationStyle::Latex => SCIENTIFIC_REGEX.replace_all(&compact, "${1}\\times 10^${2}"),
    };

    let collapsed = WHITESPACE_REGEX.replace_all(&compact, " ");
    let cleaned: String = collapsed.chars().filter(|c| !c.is_control()).collect();
    cleaned.trim().to_string()
}

/// 按符号表翻译数学符号，表外字符原样保留
pub fn translate_symbols(text: &str, style: NotationStyle) -> String {
    let mut out = String::with_capacity(text.len());
    let mut buf = [0u8; 4];
    for c in text.chars() {
        match SYMBOL_TABLE.get(c.encode_utf8(&mut buf) as &str) {
            Some((symbol, latex)) => match style {
                NotationStyle::Symbol => out.push_str(symbol),
                NotationStyle::Latex => out.push_str(latex),
            },
            None => out.push(c),
        }
    }
    out
}

fn strip_spaces(caps: &Captures<'_>) -> String {
    caps[0].split_whitespace().collect()
}

fn replace_invisible(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            '\u{00A0}' | '\u{2007}' | '\u{202F}' | '\u{200B}' | '\u{200C}' | '\u{200D}'
            | '\u{2060}' | '\u{2028}' | '\u{2029}' | '\u{FEFF}' => Some(' '),
            c if c.is_control() && !c.is_whitespace() => None,
            c => Some(c),
        })
        .collect()
}

fn compose(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    // 上一个字符所属的上下标类型，连续的上标数字只加一个 ^
    let mut script: Option<char> = None;
    for c in text.chars() {
        match script_digit(c) {
            Some((marker, digit)) => {
                if script != Some(marker) {
                    folded.push(marker);
                }
                folded.push(digit);
                script = Some(marker);
            }
            None => {
                folded.push(c);
                script = None;
            }
        }
    }
    folded.nfkc().collect()
}

fn script_digit(c: char) -> Option<(char, char)> {
    let sup = match c {
        '⁰' => Some('0'),
        '¹' => Some('1'),
        '²' => Some('2'),
        '³' => Some('3'),
        '⁴' => Some('4'),
        '⁵' => Some('5'),
        '⁶' => Some('6'),
        '⁷' => Some('7'),
        '⁸' => Some('8'),
        '⁹' => Some('9'),
        '⁻' => Some('-'),
        _ => None,
    };
    if let Some(d) = sup {
        return Some(('^', d));
    }
    match c {
        '\u{2080}'..='\u{2089}' => {
            char::from_digit(c as u32 - 0x2080, 10).map(|d| ('_', d))
        }
        _ => None,
    }
}

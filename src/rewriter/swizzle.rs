const COMPONENTS: &str = "xyzw";

/// Shortens a vector swizzle selector for a vector of `width` components,
/// per §4.6.
///
/// For `width <= 4`, numeric (`sN...`) and the `even`/`odd` word aliases
/// are expanded to letters, since letters are shorter at this width
/// (`even` → `xz` is 2 characters against 4). For `width > 4`, a numeric
/// selector is folded the other way, into `lo`/`hi`/`even`/`odd`, since a
/// word is shorter than up to 16 hex digits there. Anything that doesn't
/// match one of these shapes is returned unchanged.
pub fn shorten(width: usize, selector: &str) -> String {
    if width <= 4 {
        if let Some(indices) = parse_s_selector(selector) {
            if indices.iter().all(|&i| i < 4) {
                return indices_to_letters(&indices);
            }
        }
        match selector {
            "even" => return step_letters(width, 0),
            "odd" => return step_letters(width, 1),
            _ => {}
        }
        return selector.to_owned();
    }

    if let Some(indices) = parse_s_selector(selector) {
        if indices.iter().all(|&i| i < width) {
            let half = width / 2;
            let lo: Vec<usize> = (0..half).collect();
            let hi: Vec<usize> = (half..width).collect();
            let evens: Vec<usize> = (0..width).step_by(2).collect();
            let odds: Vec<usize> = (1..width).step_by(2).collect();
            if indices == lo {
                return "lo".to_owned();
            } else if indices == hi {
                return "hi".to_owned();
            } else if indices == evens {
                return "even".to_owned();
            } else if indices == odds {
                return "odd".to_owned();
            }
        }
    }
    selector.to_owned()
}

fn parse_s_selector(selector: &str) -> Option<Vec<usize>> {
    let rest = selector.strip_prefix('s').or_else(|| selector.strip_prefix('S'))?;
    if rest.is_empty() {
        return None;
    }
    rest.chars()
        .map(|c| c.to_digit(16).map(|d| d as usize))
        .collect()
}

fn indices_to_letters(indices: &[usize]) -> String {
    indices
        .iter()
        .map(|&i| COMPONENTS.as_bytes()[i] as char)
        .collect()
}

fn step_letters(width: usize, start: usize) -> String {
    COMPONENTS[..width].chars().skip(start).step_by(2).collect()
}

/// True when `selector` names every component of a `width`-wide vector in
/// order (`width <= 4` only — there's no letter form above 4 components) —
/// the no-op access the emitter collapses to an empty string.
pub fn is_full_identity(width: usize, selector: &str) -> bool {
    width <= 4 && selector == &COMPONENTS[..width]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_selector_at_width_4_becomes_letters() {
        assert_eq!(shorten(4, "s01"), "xy");
    }

    #[test]
    fn even_odd_words_expand_to_letters_at_small_width() {
        assert_eq!(shorten(4, "odd"), "yw");
        assert_eq!(shorten(2, "even"), "x");
    }

    #[test]
    fn wide_vector_folds_numeric_selector_to_lo_hi() {
        assert_eq!(shorten(16, "s01234567"), "lo");
        assert_eq!(shorten(16, "s89abcdef"), "hi");
    }

    #[test]
    fn wide_vector_folds_numeric_selector_to_odd() {
        assert_eq!(shorten(16, "s13579bdf"), "odd");
    }

    #[test]
    fn full_identity_selector_is_detected() {
        assert!(is_full_identity(4, "xyzw"));
        assert!(!is_full_identity(4, "xyz"));
    }
}

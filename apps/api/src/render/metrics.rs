//! Static font-metric tables for the two built-in faces we draw with.
//!
//! Character widths are in em units (relative to font size), taken from
//! the Type1 AFM files, so wrapping positions match what a PDF viewer
//! shows for the built-in fonts. Tables cover ASCII 0x20..=0x7E; other
//! encodable characters fall back to an average width, which is close
//! enough for a wrap decision.
//! Index = (char as usize) - 32.

// ────────────────────────────────────────────────────────────────────────────
// Font faces
// ────────────────────────────────────────────────────────────────────────────

/// The two faces the renderers draw with. Both are PDF built-ins, so no
/// font file ships with the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFace {
    Helvetica,
    HelveticaBold,
}

/// Points to millimetres (PDF points are 1/72 inch).
pub const PT_TO_MM: f32 = 25.4 / 72.0;

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for one face.
///
/// All widths are in em units at 1em (i.e., at the configured font size).
/// `widths[i]` = width of ASCII character `(i + 32)`, covering 0x20
/// (space) through 0x7E (~).
pub struct FontMetricTable {
    widths: [f32; 95],
    /// Fallback width for characters outside the ASCII table.
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FontMetricTable {
    /// Measures the rendered width of a string in em units.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }

    /// Width of a string in millimetres at the given font size.
    pub fn text_width_mm(&self, s: &str, font_size_pt: f32) -> f32 {
        self.measure_str(s) * font_size_pt * PT_TO_MM
    }

    /// Greedy word-wrap into lines no wider than `max_width_mm`.
    ///
    /// Words are split on Unicode whitespace and rejoined with single
    /// spaces. A single word wider than the line goes on its own line
    /// and may overhang. Whitespace-only input yields no lines.
    pub fn wrap(&self, text: &str, font_size_pt: f32, max_width_mm: f32) -> Vec<String> {
        let words: Vec<&str> = text.split_whitespace().collect();
        if words.is_empty() {
            return Vec::new();
        }

        let space_mm = self.space_width * font_size_pt * PT_TO_MM;
        let mut lines: Vec<String> = Vec::new();
        let mut current = String::new();
        let mut current_width = 0.0_f32;

        for word in words {
            let word_mm = self.text_width_mm(word, font_size_pt);

            if !current.is_empty() && current_width + space_mm + word_mm > max_width_mm {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_width = word_mm;
            } else {
                if !current.is_empty() {
                    current.push(' ');
                    current_width += space_mm;
                }
                current.push_str(word);
                current_width += word_mm;
            }
        }
        lines.push(current);
        lines
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each, AFM/1000)
// ────────────────────────────────────────────────────────────────────────────

#[rustfmt::skip]
static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    widths: [
        // sp      !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.278, 0.278, 0.278, 0.469, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
        // {      |      }      ~
        0.334, 0.260, 0.334, 0.584,
    ],
    average_char_width: 0.556,
    space_width: 0.278,
};

#[rustfmt::skip]
static HELVETICA_BOLD_TABLE: FontMetricTable = FontMetricTable {
    widths: [
        // sp      !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.333, 0.474, 0.556, 0.556, 0.889, 0.722, 0.238, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.333, 0.333, 0.584, 0.584, 0.584, 0.611, 0.975,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.722, 0.722, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.556, 0.722, 0.611, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.333, 0.278, 0.333, 0.584, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.611, 0.556, 0.611, 0.556, 0.333, 0.611, 0.611, 0.278, 0.278, 0.556, 0.278, 0.889,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.611, 0.611, 0.611, 0.611, 0.389, 0.556, 0.333, 0.611, 0.556, 0.778, 0.556, 0.556, 0.500,
        // {      |      }      ~
        0.389, 0.280, 0.389, 0.584,
    ],
    average_char_width: 0.584,
    space_width: 0.278,
};

/// Returns the static metric table for a face.
pub fn get_metrics(face: FontFace) -> &'static FontMetricTable {
    match face {
        FontFace::Helvetica => &HELVETICA_TABLE,
        FontFace::HelveticaBold => &HELVETICA_BOLD_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_str_empty_returns_zero() {
        let metrics = get_metrics(FontFace::Helvetica);
        assert_eq!(metrics.measure_str(""), 0.0);
    }

    #[test]
    fn test_measure_str_single_space() {
        let metrics = get_metrics(FontFace::Helvetica);
        let width = metrics.measure_str(" ");
        assert!(
            (width - 0.278).abs() < 1e-4,
            "space width should be 0.278, got {width}"
        );
    }

    #[test]
    fn test_measure_str_ascii_characters() {
        let metrics = get_metrics(FontFace::Helvetica);
        // "Rust" = R(0.722) + u(0.556) + s(0.500) + t(0.278) = 2.056
        let width = metrics.measure_str("Rust");
        assert!(
            (width - 2.056).abs() < 1e-3,
            "Rust width should be ~2.056, got {width}"
        );
    }

    #[test]
    fn test_measure_str_non_ascii_falls_back() {
        let metrics = get_metrics(FontFace::Helvetica);
        let width = metrics.measure_str("é");
        assert!(
            (width - metrics.average_char_width).abs() < 1e-4,
            "non-ASCII should use average_char_width"
        );
    }

    #[test]
    fn test_bold_face_wider_than_regular() {
        let text = "What We're Looking For";
        let regular = get_metrics(FontFace::Helvetica);
        let bold = get_metrics(FontFace::HelveticaBold);
        assert!(
            bold.measure_str(text) > regular.measure_str(text),
            "bold should measure wider than regular"
        );
    }

    #[test]
    fn test_text_width_mm_scales_with_font_size() {
        let metrics = get_metrics(FontFace::Helvetica);
        let at_11 = metrics.text_width_mm("hiring", 11.0);
        let at_22 = metrics.text_width_mm("hiring", 22.0);
        assert!((at_22 - 2.0 * at_11).abs() < 1e-4);
    }

    #[test]
    fn test_wrap_empty_yields_no_lines() {
        let metrics = get_metrics(FontFace::Helvetica);
        assert!(metrics.wrap("", 11.0, 180.0).is_empty());
        assert!(metrics.wrap("   ", 11.0, 180.0).is_empty());
    }

    #[test]
    fn test_wrap_short_text_single_line() {
        let metrics = get_metrics(FontFace::Helvetica);
        let lines = metrics.wrap("Senior Rust Engineer", 11.0, 180.0);
        assert_eq!(lines, vec!["Senior Rust Engineer".to_string()]);
    }

    #[test]
    fn test_wrap_splits_at_width() {
        let metrics = get_metrics(FontFace::Helvetica);
        // "word" at 11pt ≈ 2.167em ≈ 8.4mm; 5 words + spaces won't fit in 30mm
        let lines = metrics.wrap("word word word word word", 11.0, 30.0);
        assert!(lines.len() > 1, "expected a wrap, got {lines:?}");
        for line in &lines {
            assert!(
                metrics.text_width_mm(line, 11.0) <= 30.0 + 1e-3,
                "wrapped line {line:?} exceeds the max width"
            );
        }
    }

    #[test]
    fn test_wrap_rejoins_to_original_words() {
        let metrics = get_metrics(FontFace::Helvetica);
        let text = "five to eight bullet points on responsibilities and the must have skills";
        let lines = metrics.wrap(text, 11.0, 40.0);
        let rejoined = lines.join(" ");
        assert_eq!(rejoined, text, "wrapping must not drop or reorder words");
    }

    #[test]
    fn test_wrap_oversized_word_gets_own_line() {
        let metrics = get_metrics(FontFace::Helvetica);
        let lines = metrics.wrap("a Straußenvogelfederhalterhersteller b", 11.0, 10.0);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "a");
        assert_eq!(lines[2], "b");
    }
}

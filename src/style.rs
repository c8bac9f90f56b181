use nu_ansi_term::Color;

/// Semantic role of a highlighted span in a formatted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Commit counts.
    Count,
    /// Stars and forks.
    Positive,
    /// Issue actions.
    Issue,
}

/// Terminal colors used for each [`Tone`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub count: Color,
    pub positive: Color,
    pub issue: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            count: Color::Blue,
            positive: Color::Green,
            issue: Color::Yellow,
        }
    }
}

impl Palette {
    pub fn color(&self, tone: Tone) -> Color {
        match tone {
            Tone::Count => self.count,
            Tone::Positive => self.positive,
            Tone::Issue => self.issue,
        }
    }

    pub fn with_color(mut self, tone: Tone, color: Color) -> Self {
        match tone {
            Tone::Count => self.count = color,
            Tone::Positive => self.positive = color,
            Tone::Issue => self.issue = color,
        }
        self
    }
}

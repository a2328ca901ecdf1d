use natlog_rewrite::{RewriteReport, RulePass};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
        if self.enabled { format!("{}{}{}", color, s.as_ref(), ansi::RESET) } else { s.as_ref().to_string() }
    }

    fn bold(&self, s: impl AsRef<str>) -> String {
        self.paint(s, ansi::BOLD)
    }

    fn dim(&self, s: impl AsRef<str>) -> String {
        self.paint(s, ansi::DIM)
    }
}

pub fn print_gloss(input: &str, output: &str, report: &RewriteReport, palette: &Palette) {
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Gloss: \"{}\"", input), ansi::CYAN)));
    println!("\n{}", palette.paint("━━━ Rules ━━━", ansi::GRAY));
    print_passes(&report.passes, palette);

    println!("\n{}", palette.paint("━━━ Result ━━━", ansi::GRAY));
    println!("  {}", palette.bold(palette.paint(output, ansi::GREEN)));
    print_timing(report, palette);
}

pub fn print_graph(conll: &str, report: &RewriteReport, palette: &Palette) {
    println!("\n{}", palette.bold(palette.paint("⚙  Graph", ansi::CYAN)));
    println!("\n{}", palette.paint("━━━ Rules ━━━", ansi::GRAY));
    print_passes(&report.passes, palette);

    println!("\n{}", palette.paint("━━━ Result ━━━", ansi::GRAY));
    for line in conll.lines() {
        println!("  {}", line);
    }
    print_timing(report, palette);
}

fn print_passes(passes: &[RulePass], palette: &Palette) {
    for pass in passes {
        let status = if !pass.enabled {
            palette.dim("– disabled")
        } else if pass.rewrites > 0 {
            palette.paint(format!("✓ {} rewrites", pass.rewrites), ansi::GREEN)
        } else {
            palette.dim("✗ no match")
        };
        println!(
            "  {:<12} {}  {}",
            palette.paint(pass.rule, ansi::BLUE),
            status,
            palette.dim(format!("{:?}", pass.duration))
        );
    }
}

fn print_timing(report: &RewriteReport, palette: &Palette) {
    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!("  Total: {}", palette.paint(format!("{:?}", report.elapsed), ansi::GREEN));
    println!();
}

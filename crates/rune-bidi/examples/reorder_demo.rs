/// Print how a string is reordered for display.
///
/// Run with: cargo run -p rune-bidi --example reorder_demo -- "abc אבג 123"
/// Set RUST_LOG=trace to see the records after each pass.
use rune_bidi::{BidiConfig, Paragraph, UnicodeClassifier};

fn main() {
    let _ = env_logger::try_init();

    let config = BidiConfig::load();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let text = if args.is_empty() {
        "The title is \u{5de}\u{5e9}\u{5d4} (1997) in Hebrew.".to_string()
    } else {
        args.join(" ")
    };

    println!("Text: {:?}", text);
    println!("Base direction: {:?}", config.paragraph.base_direction);
    println!("Reorder mode: {:?}", config.reorder.mode);
    println!();

    let mut para = Paragraph::from_text(&text, &UnicodeClassifier);
    if !para.contains_rtl() {
        println!("(no right-to-left characters)");
    }

    match para.process(&config) {
        Ok(resolution) => println!("Resolution: {:?}", resolution),
        Err(e) => {
            eprintln!("Failed to reorder: {}", e);
            return;
        }
    }
    println!("Direction: {:?}", para.direction());
    println!();

    println!("idx  char  class  orig  level  display");
    for r in para.records() {
        println!(
            "{:3}  {:>4}  {:>5}  {:>4}  {:5}  {:7}",
            r.logical_index,
            format!("{:?}", r.character),
            r.class,
            r.original_class(),
            r.level,
            r.display_order_index
        );
    }
    println!();
    println!("Visual: {}", para.visual_string());
}

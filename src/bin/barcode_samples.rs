// Прогон встроенных образцов: validate по наборам и extract по «шумным» строкам.
use shelfscan::prelude::*;
use shelfscan::samples;

fn main() {
    println!("Проверка образцов штрих-кодов");

    for (name, set) in samples::ALL_SETS {
        println!("\n[{name}]");
        for code in *set {
            let r = validate(code);
            if r.is_valid() {
                println!("  ok   {code} -> {} ({})", r.formatted_code(), r.kind());
            } else {
                println!("  fail {code} -> {} ({})", r.kind(), r.error_messages().join(", "));
            }
        }
    }

    println!("\n[извлечение из текста сканера]");
    for (label, accept) in [("книги", AcceptedTypes::BOOKS), ("продукты", AcceptedTypes::FOOD)] {
        println!("  {label}: {accept:?}");
        for text in samples::SCANNED_TEXTS {
            match extract_from_scanned_text(text, accept) {
                Some(r) => println!("    {text:?} -> {}: {}", r.kind(), r.formatted_code()),
                None => println!("    {text:?} -> нет"),
            }
        }
    }
}

use bitwise_util::{
    BitwiseError, count_set_bits, iter_set_bits, pack_bools, set_bit, toggle_bit, try_set_bit,
    unpack_words, words_from_le_bytes, words_to_le_bytes,
};

fn main() {
    env_logger::init();
    println!("=== Bitwise Util Examples ===\n");

    // Example 1: Flags in a single word
    example_single_word();

    // Example 2: Packing a flag list for storage
    let _ = example_packing();

    // Example 3: Checked positions
    example_checked();
}

fn example_single_word() {
    println!("Example 1: Door states in one word");

    const LOCKED: u32 = 0;
    const OPEN: u32 = 1;
    const ALARMED: u32 = 2;

    let mut door = 0;
    door = set_bit(door, LOCKED);
    door = set_bit(door, ALARMED);
    door = toggle_bit(door, OPEN);

    println!("  Word: 0b{:03b}", door);
    println!("  Set bits: {}", count_set_bits(door));
    for position in iter_set_bits(door) {
        println!("    - bit {}", position);
    }
    println!();
}

fn example_packing() -> Result<(), BitwiseError> {
    println!("Example 2: Packing 100 visited-tile flags");

    let visited: Vec<bool> = (0..100).map(|i| i % 7 == 0).collect();
    let words = pack_bools(&visited);
    let bytes = words_to_le_bytes(&words);

    println!("  Vec<bool>: {} bytes", visited.len());
    println!("  Packed:    {} bytes", bytes.len());

    let restored = unpack_words(&words_from_le_bytes(&bytes)?, visited.len())?;
    println!("  Restored matches: {}", restored == visited);
    println!();

    Ok(())
}

fn example_checked() {
    println!("Example 3: Rejecting bad positions");

    match try_set_bit(0, 40) {
        Ok(word) => println!("  Unexpected word {}", word),
        Err(e) => println!("  Error: {}", e),
    }
    println!();
}

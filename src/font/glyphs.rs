//! Built-in square bitmap fonts.
//!
//! One `u16` per glyph row; the most significant of the `size` low bits is
//! the leftmost column.

#[rustfmt::skip]
pub(super) static FONT_6X6: &[(char, &[u16])] = &[
    ('A', &[0b011000, 0b100100, 0b111100, 0b100100, 0b100100, 0b000000]),
    ('B', &[0b111000, 0b100100, 0b111000, 0b100100, 0b111000, 0b000000]),
    ('C', &[0b011000, 0b100100, 0b100000, 0b100100, 0b011000, 0b000000]),
    ('D', &[0b111000, 0b100100, 0b100100, 0b100100, 0b111000, 0b000000]),
    ('E', &[0b111100, 0b100000, 0b111000, 0b100000, 0b111100, 0b000000]),
    ('F', &[0b111100, 0b100000, 0b111000, 0b100000, 0b100000, 0b000000]),
    ('G', &[0b011000, 0b100000, 0b101100, 0b100100, 0b011000, 0b000000]),
    ('H', &[0b100100, 0b100100, 0b111100, 0b100100, 0b100100, 0b000000]),
    ('I', &[0b011100, 0b001000, 0b001000, 0b001000, 0b011100, 0b000000]),
    ('J', &[0b000100, 0b000100, 0b000100, 0b100100, 0b011000, 0b000000]),
    ('K', &[0b100100, 0b101000, 0b110000, 0b101000, 0b100100, 0b000000]),
    ('L', &[0b100000, 0b100000, 0b100000, 0b100000, 0b111100, 0b000000]),
    ('M', &[0b100010, 0b110110, 0b101010, 0b100010, 0b100010, 0b000000]),
    ('N', &[0b100010, 0b110010, 0b101010, 0b100110, 0b100010, 0b000000]),
    ('O', &[0b011100, 0b100010, 0b100010, 0b100010, 0b011100, 0b000000]),
    ('P', &[0b111000, 0b100100, 0b111000, 0b100000, 0b100000, 0b000000]),
    ('Q', &[0b011100, 0b100010, 0b100010, 0b101010, 0b011100, 0b000010]),
    ('R', &[0b111000, 0b100100, 0b111000, 0b101000, 0b100100, 0b000000]),
    ('S', &[0b011100, 0b100000, 0b011000, 0b000100, 0b111000, 0b000000]),
    ('T', &[0b111110, 0b001000, 0b001000, 0b001000, 0b001000, 0b000000]),
    ('U', &[0b100010, 0b100010, 0b100010, 0b100010, 0b011100, 0b000000]),
    ('V', &[0b100010, 0b100010, 0b100010, 0b010100, 0b001000, 0b000000]),
    ('W', &[0b100010, 0b100010, 0b101010, 0b110110, 0b100010, 0b000000]),
    ('X', &[0b100010, 0b010100, 0b001000, 0b010100, 0b100010, 0b000000]),
    ('Y', &[0b100010, 0b010100, 0b001000, 0b001000, 0b001000, 0b000000]),
    ('Z', &[0b111100, 0b000100, 0b001000, 0b010000, 0b111100, 0b000000]),
    ('0', &[0b011100, 0b110010, 0b101010, 0b100110, 0b011100, 0b000000]),
    ('1', &[0b001000, 0b011000, 0b001000, 0b001000, 0b011100, 0b000000]),
    ('2', &[0b011000, 0b100100, 0b001000, 0b010000, 0b111100, 0b000000]),
    ('3', &[0b111000, 0b000100, 0b011000, 0b000100, 0b111000, 0b000000]),
    ('4', &[0b001000, 0b011000, 0b101000, 0b111100, 0b001000, 0b000000]),
    ('5', &[0b111100, 0b100000, 0b111000, 0b000100, 0b111000, 0b000000]),
    ('6', &[0b011000, 0b100000, 0b111000, 0b100100, 0b011000, 0b000000]),
    ('7', &[0b111100, 0b000100, 0b001000, 0b010000, 0b010000, 0b000000]),
    ('8', &[0b011000, 0b100100, 0b011000, 0b100100, 0b011000, 0b000000]),
    ('9', &[0b011000, 0b100100, 0b011100, 0b000100, 0b011000, 0b000000]),
    ('.', &[0b000000, 0b000000, 0b000000, 0b011000, 0b011000, 0b000000]),
    (',', &[0b000000, 0b000000, 0b011000, 0b011000, 0b001000, 0b010000]),
    ('!', &[0b001000, 0b001000, 0b001000, 0b000000, 0b001000, 0b000000]),
    ('?', &[0b011000, 0b100100, 0b001000, 0b000000, 0b001000, 0b000000]),
    ('-', &[0b000000, 0b000000, 0b111100, 0b000000, 0b000000, 0b000000]),
    ('+', &[0b000000, 0b001000, 0b111100, 0b001000, 0b000000, 0b000000]),
    (':', &[0b000000, 0b011000, 0b000000, 0b011000, 0b000000, 0b000000]),
    (' ', &[0b000000, 0b000000, 0b000000, 0b000000, 0b000000, 0b000000]),
];

#[rustfmt::skip]
pub(super) static FONT_7X7: &[(char, &[u16])] = &[
    ('A', &[0b0111000, 0b1000100, 0b1000100, 0b1111100, 0b1000100, 0b1000100, 0b0000000]),
    ('B', &[0b1111000, 0b1000100, 0b1111000, 0b1000100, 0b1000100, 0b1111000, 0b0000000]),
    ('C', &[0b0111000, 0b1000100, 0b1000000, 0b1000000, 0b1000100, 0b0111000, 0b0000000]),
    ('D', &[0b1110000, 0b1001000, 0b1000100, 0b1000100, 0b1001000, 0b1110000, 0b0000000]),
    ('E', &[0b1111100, 0b1000000, 0b1111000, 0b1000000, 0b1000000, 0b1111100, 0b0000000]),
    ('F', &[0b1111100, 0b1000000, 0b1111000, 0b1000000, 0b1000000, 0b1000000, 0b0000000]),
    ('G', &[0b0111000, 0b1000100, 0b1000000, 0b1011100, 0b1000100, 0b0111000, 0b0000000]),
    ('H', &[0b1000100, 0b1000100, 0b1111100, 0b1000100, 0b1000100, 0b1000100, 0b0000000]),
    ('I', &[0b0111000, 0b0010000, 0b0010000, 0b0010000, 0b0010000, 0b0111000, 0b0000000]),
    ('J', &[0b0001000, 0b0001000, 0b0001000, 0b1001000, 0b1001000, 0b0110000, 0b0000000]),
    ('K', &[0b1000100, 0b1001000, 0b1110000, 0b1001000, 0b1000100, 0b1000100, 0b0000000]),
    ('L', &[0b1000000, 0b1000000, 0b1000000, 0b1000000, 0b1000000, 0b1111100, 0b0000000]),
    ('M', &[0b1000100, 0b1101100, 0b1010100, 0b1000100, 0b1000100, 0b1000100, 0b0000000]),
    ('N', &[0b1000100, 0b1100100, 0b1010100, 0b1001100, 0b1000100, 0b1000100, 0b0000000]),
    ('O', &[0b0111000, 0b1000100, 0b1000100, 0b1000100, 0b1000100, 0b0111000, 0b0000000]),
    ('P', &[0b1111000, 0b1000100, 0b1000100, 0b1111000, 0b1000000, 0b1000000, 0b0000000]),
    ('Q', &[0b0111000, 0b1000100, 0b1000100, 0b1010100, 0b1001000, 0b0110100, 0b0000000]),
    ('R', &[0b1111000, 0b1000100, 0b1111000, 0b1010000, 0b1001000, 0b1000100, 0b0000000]),
    ('S', &[0b0111000, 0b1000100, 0b0110000, 0b0001100, 0b1000100, 0b0111000, 0b0000000]),
    ('T', &[0b1111100, 0b0010000, 0b0010000, 0b0010000, 0b0010000, 0b0010000, 0b0000000]),
    ('U', &[0b1000100, 0b1000100, 0b1000100, 0b1000100, 0b1000100, 0b0111000, 0b0000000]),
    ('V', &[0b1000100, 0b1000100, 0b1000100, 0b1000100, 0b0101000, 0b0010000, 0b0000000]),
    ('W', &[0b1000100, 0b1000100, 0b1000100, 0b1010100, 0b1101100, 0b1000100, 0b0000000]),
    ('X', &[0b1000100, 0b1000100, 0b0101000, 0b0010000, 0b0101000, 0b1000100, 0b0000000]),
    ('Y', &[0b1000100, 0b1000100, 0b0101000, 0b0010000, 0b0010000, 0b0010000, 0b0000000]),
    ('Z', &[0b1111100, 0b0000100, 0b0001000, 0b0010000, 0b0100000, 0b1111100, 0b0000000]),
    ('0', &[0b0111000, 0b1001100, 0b1010100, 0b1100100, 0b1000100, 0b0111000, 0b0000000]),
    ('1', &[0b0010000, 0b0110000, 0b0010000, 0b0010000, 0b0010000, 0b0111000, 0b0000000]),
    ('2', &[0b0111000, 0b1000100, 0b0001000, 0b0010000, 0b0100000, 0b1111100, 0b0000000]),
    ('3', &[0b0111000, 0b1000100, 0b0011000, 0b0000100, 0b1000100, 0b0111000, 0b0000000]),
    ('4', &[0b0001000, 0b0011000, 0b0101000, 0b1111100, 0b0001000, 0b0001000, 0b0000000]),
    ('5', &[0b1111100, 0b1000000, 0b1111000, 0b0000100, 0b1000100, 0b0111000, 0b0000000]),
    ('6', &[0b0111000, 0b1000000, 0b1111000, 0b1000100, 0b1000100, 0b0111000, 0b0000000]),
    ('7', &[0b1111100, 0b0000100, 0b0001000, 0b0010000, 0b0010000, 0b0010000, 0b0000000]),
    ('8', &[0b0111000, 0b1000100, 0b0111000, 0b1000100, 0b1000100, 0b0111000, 0b0000000]),
    ('9', &[0b0111000, 0b1000100, 0b1000100, 0b0111100, 0b0000100, 0b0111000, 0b0000000]),
    ('.', &[0b0000000, 0b0000000, 0b0000000, 0b0000000, 0b0110000, 0b0110000, 0b0000000]),
    (',', &[0b0000000, 0b0000000, 0b0000000, 0b0110000, 0b0110000, 0b0010000, 0b0100000]),
    ('!', &[0b0010000, 0b0010000, 0b0010000, 0b0010000, 0b0000000, 0b0010000, 0b0000000]),
    ('?', &[0b0111000, 0b1000100, 0b0001000, 0b0010000, 0b0000000, 0b0010000, 0b0000000]),
    ('-', &[0b0000000, 0b0000000, 0b1111100, 0b0000000, 0b0000000, 0b0000000, 0b0000000]),
    ('+', &[0b0000000, 0b0010000, 0b0010000, 0b1111100, 0b0010000, 0b0010000, 0b0000000]),
    (':', &[0b0000000, 0b0110000, 0b0110000, 0b0000000, 0b0110000, 0b0110000, 0b0000000]),
    (' ', &[0b0000000, 0b0000000, 0b0000000, 0b0000000, 0b0000000, 0b0000000, 0b0000000]),
];

#[rustfmt::skip]
pub(super) static FONT_8X8: &[(char, &[u16])] = &[
    ('A', &[0b00111100, 0b01000010, 0b01000010, 0b01111110, 0b01000010, 0b01000010, 0b01000010, 0b00000000]),
    ('B', &[0b01111100, 0b01000010, 0b01000010, 0b01111100, 0b01000010, 0b01000010, 0b01111100, 0b00000000]),
    ('C', &[0b00111100, 0b01000010, 0b01000000, 0b01000000, 0b01000000, 0b01000010, 0b00111100, 0b00000000]),
    ('D', &[0b01111000, 0b01000100, 0b01000010, 0b01000010, 0b01000010, 0b01000100, 0b01111000, 0b00000000]),
    ('E', &[0b01111110, 0b01000000, 0b01000000, 0b01111100, 0b01000000, 0b01000000, 0b01111110, 0b00000000]),
    ('F', &[0b01111110, 0b01000000, 0b01000000, 0b01111100, 0b01000000, 0b01000000, 0b01000000, 0b00000000]),
    ('G', &[0b00111100, 0b01000010, 0b01000000, 0b01001110, 0b01000010, 0b01000010, 0b00111100, 0b00000000]),
    ('H', &[0b01000010, 0b01000010, 0b01000010, 0b01111110, 0b01000010, 0b01000010, 0b01000010, 0b00000000]),
    ('I', &[0b00111110, 0b00001000, 0b00001000, 0b00001000, 0b00001000, 0b00001000, 0b00111110, 0b00000000]),
    ('J', &[0b00000010, 0b00000010, 0b00000010, 0b00000010, 0b01000010, 0b01000010, 0b00111100, 0b00000000]),
    ('K', &[0b01000010, 0b01000100, 0b01001000, 0b01110000, 0b01001000, 0b01000100, 0b01000010, 0b00000000]),
    ('L', &[0b01000000, 0b01000000, 0b01000000, 0b01000000, 0b01000000, 0b01000000, 0b01111110, 0b00000000]),
    ('M', &[0b01000010, 0b01100110, 0b01011010, 0b01000010, 0b01000010, 0b01000010, 0b01000010, 0b00000000]),
    ('N', &[0b01000010, 0b01100010, 0b01010010, 0b01001010, 0b01000110, 0b01000010, 0b01000010, 0b00000000]),
    ('O', &[0b00111100, 0b01000010, 0b01000010, 0b01000010, 0b01000010, 0b01000010, 0b00111100, 0b00000000]),
    ('P', &[0b01111100, 0b01000010, 0b01000010, 0b01111100, 0b01000000, 0b01000000, 0b01000000, 0b00000000]),
    ('Q', &[0b00111100, 0b01000010, 0b01000010, 0b01000010, 0b01010010, 0b01001010, 0b00111100, 0b00000110]),
    ('R', &[0b01111100, 0b01000010, 0b01000010, 0b01111100, 0b01001000, 0b01000100, 0b01000010, 0b00000000]),
    ('S', &[0b00111100, 0b01000010, 0b01000000, 0b00111100, 0b00000010, 0b01000010, 0b00111100, 0b00000000]),
    ('T', &[0b01111110, 0b00001000, 0b00001000, 0b00001000, 0b00001000, 0b00001000, 0b00001000, 0b00000000]),
    ('U', &[0b01000010, 0b01000010, 0b01000010, 0b01000010, 0b01000010, 0b01000010, 0b00111100, 0b00000000]),
    ('V', &[0b01000010, 0b01000010, 0b01000010, 0b01000010, 0b01000010, 0b00100100, 0b00011000, 0b00000000]),
    ('W', &[0b01000010, 0b01000010, 0b01000010, 0b01000010, 0b01011010, 0b01100110, 0b01000010, 0b00000000]),
    ('X', &[0b01000010, 0b01000010, 0b00100100, 0b00011000, 0b00100100, 0b01000010, 0b01000010, 0b00000000]),
    ('Y', &[0b01000010, 0b01000010, 0b00100100, 0b00011000, 0b00001000, 0b00001000, 0b00001000, 0b00000000]),
    ('Z', &[0b01111110, 0b00000010, 0b00000100, 0b00011000, 0b00100000, 0b01000000, 0b01111110, 0b00000000]),
    ('0', &[0b00111100, 0b01000110, 0b01001010, 0b01010010, 0b01100010, 0b01000010, 0b00111100, 0b00000000]),
    ('1', &[0b00001000, 0b00011000, 0b00001000, 0b00001000, 0b00001000, 0b00001000, 0b00011100, 0b00000000]),
    ('2', &[0b00111100, 0b01000010, 0b00000010, 0b00001100, 0b00110000, 0b01000000, 0b01111110, 0b00000000]),
    ('3', &[0b00111100, 0b01000010, 0b00000010, 0b00011100, 0b00000010, 0b01000010, 0b00111100, 0b00000000]),
    ('4', &[0b00000100, 0b00001100, 0b00010100, 0b00100100, 0b01111110, 0b00000100, 0b00000100, 0b00000000]),
    ('5', &[0b01111110, 0b01000000, 0b01111100, 0b00000010, 0b00000010, 0b01000010, 0b00111100, 0b00000000]),
    ('6', &[0b00111100, 0b01000000, 0b01000000, 0b01111100, 0b01000010, 0b01000010, 0b00111100, 0b00000000]),
    ('7', &[0b01111110, 0b00000010, 0b00000100, 0b00001000, 0b00010000, 0b00010000, 0b00010000, 0b00000000]),
    ('8', &[0b00111100, 0b01000010, 0b01000010, 0b00111100, 0b01000010, 0b01000010, 0b00111100, 0b00000000]),
    ('9', &[0b00111100, 0b01000010, 0b01000010, 0b00111110, 0b00000010, 0b00000010, 0b00111100, 0b00000000]),
    ('.', &[0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00011000, 0b00011000, 0b00000000]),
    (',', &[0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00011000, 0b00011000, 0b00001000, 0b00010000]),
    ('!', &[0b00011000, 0b00011000, 0b00011000, 0b00011000, 0b00011000, 0b00000000, 0b00011000, 0b00000000]),
    ('?', &[0b00111100, 0b01000010, 0b00000010, 0b00001100, 0b00010000, 0b00000000, 0b00010000, 0b00000000]),
    ('-', &[0b00000000, 0b00000000, 0b00000000, 0b01111110, 0b00000000, 0b00000000, 0b00000000, 0b00000000]),
    ('+', &[0b00000000, 0b00001000, 0b00001000, 0b00111110, 0b00001000, 0b00001000, 0b00000000, 0b00000000]),
    (':', &[0b00000000, 0b00011000, 0b00011000, 0b00000000, 0b00011000, 0b00011000, 0b00000000, 0b00000000]),
    (' ', &[0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000, 0b00000000]),
];

#[rustfmt::skip]
pub(super) static FONT_9X9: &[(char, &[u16])] = &[
    ('A', &[0b001111000, 0b011001100, 0b011001100, 0b011001100, 0b011111100, 0b011001100, 0b011001100, 0b011001100, 0b000000000]),
    ('B', &[0b011111000, 0b011001100, 0b011001100, 0b011111000, 0b011001100, 0b011001100, 0b011001100, 0b011111000, 0b000000000]),
    ('C', &[0b001111000, 0b011001100, 0b011000000, 0b011000000, 0b011000000, 0b011000000, 0b011001100, 0b001111000, 0b000000000]),
    ('D', &[0b011110000, 0b011011000, 0b011001100, 0b011001100, 0b011001100, 0b011001100, 0b011011000, 0b011110000, 0b000000000]),
    ('E', &[0b011111100, 0b011000000, 0b011000000, 0b011111000, 0b011000000, 0b011000000, 0b011000000, 0b011111100, 0b000000000]),
    ('F', &[0b011111100, 0b011000000, 0b011000000, 0b011111000, 0b011000000, 0b011000000, 0b011000000, 0b011000000, 0b000000000]),
    ('G', &[0b001111000, 0b011001100, 0b011000000, 0b011000000, 0b011011100, 0b011001100, 0b011001100, 0b001111000, 0b000000000]),
    ('H', &[0b011001100, 0b011001100, 0b011001100, 0b011111100, 0b011001100, 0b011001100, 0b011001100, 0b011001100, 0b000000000]),
    ('I', &[0b001111000, 0b000110000, 0b000110000, 0b000110000, 0b000110000, 0b000110000, 0b000110000, 0b001111000, 0b000000000]),
    ('J', &[0b000001100, 0b000001100, 0b000001100, 0b000001100, 0b000001100, 0b011001100, 0b011001100, 0b001111000, 0b000000000]),
    ('K', &[0b011001100, 0b011011000, 0b011110000, 0b011100000, 0b011110000, 0b011011000, 0b011001100, 0b011001100, 0b000000000]),
    ('L', &[0b011000000, 0b011000000, 0b011000000, 0b011000000, 0b011000000, 0b011000000, 0b011000000, 0b011111100, 0b000000000]),
    ('M', &[0b011000110, 0b011101110, 0b011111110, 0b011010110, 0b011000110, 0b011000110, 0b011000110, 0b011000110, 0b000000000]),
    ('N', &[0b011000110, 0b011100110, 0b011110110, 0b011011110, 0b011001110, 0b011000110, 0b011000110, 0b011000110, 0b000000000]),
    ('O', &[0b001111000, 0b011001100, 0b011001100, 0b011001100, 0b011001100, 0b011001100, 0b011001100, 0b001111000, 0b000000000]),
    ('P', &[0b011111000, 0b011001100, 0b011001100, 0b011001100, 0b011111000, 0b011000000, 0b011000000, 0b011000000, 0b000000000]),
    ('Q', &[0b001111000, 0b011001100, 0b011001100, 0b011001100, 0b011001100, 0b011011100, 0b011001100, 0b001111000, 0b000001100]),
    ('R', &[0b011111000, 0b011001100, 0b011001100, 0b011001100, 0b011111000, 0b011011000, 0b011001100, 0b011001100, 0b000000000]),
    ('S', &[0b001111000, 0b011001100, 0b011000000, 0b001110000, 0b000011000, 0b000001100, 0b011001100, 0b001111000, 0b000000000]),
    ('T', &[0b011111100, 0b000110000, 0b000110000, 0b000110000, 0b000110000, 0b000110000, 0b000110000, 0b000110000, 0b000000000]),
    ('U', &[0b011001100, 0b011001100, 0b011001100, 0b011001100, 0b011001100, 0b011001100, 0b011001100, 0b001111000, 0b000000000]),
    ('V', &[0b011001100, 0b011001100, 0b011001100, 0b011001100, 0b011001100, 0b011001100, 0b001111000, 0b000110000, 0b000000000]),
    ('W', &[0b011000110, 0b011000110, 0b011000110, 0b011000110, 0b011010110, 0b011111110, 0b011101110, 0b011000110, 0b000000000]),
    ('X', &[0b011001100, 0b011001100, 0b001111000, 0b000110000, 0b000110000, 0b001111000, 0b011001100, 0b011001100, 0b000000000]),
    ('Y', &[0b011001100, 0b011001100, 0b011001100, 0b001111000, 0b000110000, 0b000110000, 0b000110000, 0b000110000, 0b000000000]),
    ('Z', &[0b011111100, 0b000001100, 0b000011000, 0b000110000, 0b001100000, 0b011000000, 0b011000000, 0b011111100, 0b000000000]),
    ('0', &[0b001111000, 0b011001100, 0b011001100, 0b011001100, 0b011001100, 0b011001100, 0b011001100, 0b001111000, 0b000000000]),
    ('1', &[0b000110000, 0b001110000, 0b000110000, 0b000110000, 0b000110000, 0b000110000, 0b000110000, 0b001111000, 0b000000000]),
    ('2', &[0b001111000, 0b011001100, 0b000001100, 0b000011000, 0b000110000, 0b001100000, 0b011000000, 0b011111100, 0b000000000]),
    ('3', &[0b001111000, 0b011001100, 0b000001100, 0b000111000, 0b000001100, 0b000001100, 0b011001100, 0b001111000, 0b000000000]),
    ('4', &[0b000011000, 0b000111000, 0b001111000, 0b011011000, 0b011111100, 0b000011000, 0b000011000, 0b000011000, 0b000000000]),
    ('5', &[0b011111100, 0b011000000, 0b011000000, 0b011111000, 0b000001100, 0b000001100, 0b011001100, 0b001111000, 0b000000000]),
    ('6', &[0b001111000, 0b011001100, 0b011000000, 0b011111000, 0b011001100, 0b011001100, 0b011001100, 0b001111000, 0b000000000]),
    ('7', &[0b011111100, 0b000001100, 0b000011000, 0b000110000, 0b001100000, 0b001100000, 0b001100000, 0b001100000, 0b000000000]),
    ('8', &[0b001111000, 0b011001100, 0b011001100, 0b001111000, 0b011001100, 0b011001100, 0b011001100, 0b001111000, 0b000000000]),
    ('9', &[0b001111000, 0b011001100, 0b011001100, 0b011001100, 0b001111100, 0b000001100, 0b011001100, 0b001111000, 0b000000000]),
    ('.', &[0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b001110000, 0b001110000, 0b000000000]),
    (',', &[0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b001110000, 0b001110000, 0b000110000, 0b001100000]),
    ('!', &[0b000110000, 0b000110000, 0b000110000, 0b000110000, 0b000110000, 0b000000000, 0b000110000, 0b000110000, 0b000000000]),
    ('?', &[0b001111000, 0b011001100, 0b000001100, 0b000011000, 0b000110000, 0b000000000, 0b000110000, 0b000110000, 0b000000000]),
    ('-', &[0b000000000, 0b000000000, 0b000000000, 0b011111100, 0b011111100, 0b000000000, 0b000000000, 0b000000000, 0b000000000]),
    ('+', &[0b000000000, 0b000110000, 0b000110000, 0b011111100, 0b011111100, 0b000110000, 0b000110000, 0b000000000, 0b000000000]),
    (':', &[0b000000000, 0b000000000, 0b001110000, 0b001110000, 0b000000000, 0b001110000, 0b001110000, 0b000000000, 0b000000000]),
    (' ', &[0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000, 0b000000000]),
];

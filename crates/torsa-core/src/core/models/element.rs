use phf::{Map, phf_map};

/// Atomic numbers for the element symbols that appear in combustion-kinetics
/// species. `X` is the dummy-atom convention used by z-matrices.
#[rustfmt::skip]
pub static ATOMIC_NUMBERS: Map<&'static str, u8> = phf_map! {
    "X"  => 0,
    "H"  => 1,  "He" => 2,
    "B"  => 5,  "C"  => 6,  "N"  => 7,  "O"  => 8,  "F"  => 9,  "Ne" => 10,
    "Si" => 14, "P"  => 15, "S"  => 16, "Cl" => 17, "Ar" => 18,
    "Br" => 35, "I"  => 53,
};

pub fn atomic_number(symbol: &str) -> Option<u8> {
    ATOMIC_NUMBERS.get(symbol.trim()).copied()
}

pub fn is_hydrogen(symbol: &str) -> bool {
    symbol.trim() == "H"
}

/// Dummy atoms (`X`) carry no nuclei; they only anchor internal coordinates.
pub fn is_dummy(symbol: &str) -> bool {
    symbol.trim() == "X"
}

pub fn is_carbon(symbol: &str) -> bool {
    symbol.trim() == "C"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atomic_numbers_cover_common_species() {
        assert_eq!(atomic_number("C"), Some(6));
        assert_eq!(atomic_number("H"), Some(1));
        assert_eq!(atomic_number(" O "), Some(8));
        assert_eq!(atomic_number("Zz"), None);
    }

    #[test]
    fn dummy_and_hydrogen_classification() {
        assert!(is_dummy("X"));
        assert!(!is_dummy("H"));
        assert!(is_hydrogen("H"));
        assert!(!is_hydrogen("He"));
    }
}

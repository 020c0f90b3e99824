use phf::{Map, phf_map};

static ELEMENT_NAMES: Map<&'static str, &'static str> = phf_map! {
    "H" => "Hydrogen", "He" => "Helium", "Li" => "Lithium", "Be" => "Beryllium",
    "B" => "Boron", "C" => "Carbon", "N" => "Nitrogen", "O" => "Oxygen",
    "F" => "Fluorine", "Ne" => "Neon", "Na" => "Sodium", "Mg" => "Magnesium",
    "Al" => "Aluminium", "Si" => "Silicon", "P" => "Phosphorus", "S" => "Sulfur",
    "Cl" => "Chlorine", "Ar" => "Argon", "K" => "Potassium", "Ca" => "Calcium",
    "Sc" => "Scandium", "Ti" => "Titanium", "V" => "Vanadium", "Cr" => "Chromium",
    "Mn" => "Manganese", "Fe" => "Iron", "Co" => "Cobalt", "Ni" => "Nickel",
    "Cu" => "Copper", "Zn" => "Zinc", "Ga" => "Gallium", "Ge" => "Germanium",
    "As" => "Arsenic", "Se" => "Selenium", "Br" => "Bromine", "Kr" => "Krypton",
    "Rb" => "Rubidium", "Sr" => "Strontium", "Y" => "Yttrium", "Zr" => "Zirconium",
    "Nb" => "Niobium", "Mo" => "Molybdenum", "Tc" => "Technetium", "Ru" => "Ruthenium",
    "Rh" => "Rhodium", "Pd" => "Palladium", "Ag" => "Silver", "Cd" => "Cadmium",
    "In" => "Indium", "Sn" => "Tin", "Sb" => "Antimony", "Te" => "Tellurium",
    "I" => "Iodine", "Xe" => "Xenon", "Cs" => "Cesium", "Ba" => "Barium",
    "La" => "Lanthanum", "Ce" => "Cerium", "Pr" => "Praseodymium", "Nd" => "Neodymium",
    "Pm" => "Promethium", "Sm" => "Samarium", "Eu" => "Europium", "Gd" => "Gadolinium",
    "Tb" => "Terbium", "Dy" => "Dysprosium", "Ho" => "Holmium", "Er" => "Erbium",
    "Tm" => "Thulium", "Yb" => "Ytterbium", "Lu" => "Lutetium", "Hf" => "Hafnium",
    "Ta" => "Tantalum", "W" => "Tungsten", "Re" => "Rhenium", "Os" => "Osmium",
    "Ir" => "Iridium", "Pt" => "Platinum", "Au" => "Gold", "Hg" => "Mercury",
    "Tl" => "Thallium", "Pb" => "Lead", "Bi" => "Bismuth", "Po" => "Polonium",
    "At" => "Astatine", "Rn" => "Radon", "Fr" => "Francium", "Ra" => "Radium",
    "Ac" => "Actinium", "Th" => "Thorium", "Pa" => "Protactinium", "U" => "Uranium",
    "Np" => "Neptunium", "Pu" => "Plutonium", "Am" => "Americium", "Cm" => "Curium",
    "Bk" => "Berkelium", "Cf" => "Californium", "Es" => "Einsteinium", "Fm" => "Fermium",
    "Md" => "Mendelevium", "No" => "Nobelium", "Lr" => "Lawrencium", "Rf" => "Rutherfordium",
    "Db" => "Dubnium", "Sg" => "Seaborgium", "Bh" => "Bohrium", "Hs" => "Hassium",
    "Mt" => "Meitnerium", "Ds" => "Darmstadtium", "Rg" => "Roentgenium", "Cn" => "Copernicium",
    "Nh" => "Nihonium", "Fl" => "Flerovium", "Mc" => "Moscovium", "Lv" => "Livermorium",
    "Ts" => "Tennessine", "Og" => "Oganesson",
};

static ELEMENT_SYMBOLS: Map<&'static str, &'static str> = phf_map! {
    "HYDROGEN" => "H", "HELIUM" => "He", "LITHIUM" => "Li",
    "BERYLLIUM" => "Be", "BORON" => "B", "CARBON" => "C",
    "NITROGEN" => "N", "OXYGEN" => "O", "FLUORINE" => "F",
    "NEON" => "Ne", "SODIUM" => "Na", "MAGNESIUM" => "Mg",
    "ALUMINIUM" => "Al", "SILICON" => "Si", "PHOSPHORUS" => "P",
    "SULFUR" => "S", "CHLORINE" => "Cl", "ARGON" => "Ar",
    "POTASSIUM" => "K", "CALCIUM" => "Ca", "SCANDIUM" => "Sc",
    "TITANIUM" => "Ti", "VANADIUM" => "V", "CHROMIUM" => "Cr",
    "MANGANESE" => "Mn", "IRON" => "Fe", "COBALT" => "Co",
    "NICKEL" => "Ni", "COPPER" => "Cu", "ZINC" => "Zn",
    "GALLIUM" => "Ga", "GERMANIUM" => "Ge", "ARSENIC" => "As",
    "SELENIUM" => "Se", "BROMINE" => "Br", "KRYPTON" => "Kr",
    "RUBIDIUM" => "Rb", "STRONTIUM" => "Sr", "YTTRIUM" => "Y",
    "ZIRCONIUM" => "Zr", "NIOBIUM" => "Nb", "MOLYBDENUM" => "Mo",
    "TECHNETIUM" => "Tc", "RUTHENIUM" => "Ru", "RHODIUM" => "Rh",
    "PALLADIUM" => "Pd", "SILVER" => "Ag", "CADMIUM" => "Cd",
    "INDIUM" => "In", "TIN" => "Sn", "ANTIMONY" => "Sb",
    "TELLURIUM" => "Te", "IODINE" => "I", "XENON" => "Xe",
    "CESIUM" => "Cs", "BARIUM" => "Ba", "LANTHANUM" => "La",
    "CERIUM" => "Ce", "PRASEODYMIUM" => "Pr", "NEODYMIUM" => "Nd",
    "PROMETHIUM" => "Pm", "SAMARIUM" => "Sm", "EUROPIUM" => "Eu",
    "GADOLINIUM" => "Gd", "TERBIUM" => "Tb", "DYSPROSIUM" => "Dy",
    "HOLMIUM" => "Ho", "ERBIUM" => "Er", "THULIUM" => "Tm",
    "YTTERBIUM" => "Yb", "LUTETIUM" => "Lu", "HAFNIUM" => "Hf",
    "TANTALUM" => "Ta", "TUNGSTEN" => "W", "RHENIUM" => "Re",
    "OSMIUM" => "Os", "IRIDIUM" => "Ir", "PLATINUM" => "Pt",
    "GOLD" => "Au", "MERCURY" => "Hg", "THALLIUM" => "Tl",
    "LEAD" => "Pb", "BISMUTH" => "Bi", "POLONIUM" => "Po",
    "ASTATINE" => "At", "RADON" => "Rn", "FRANCIUM" => "Fr",
    "RADIUM" => "Ra", "ACTINIUM" => "Ac", "THORIUM" => "Th",
    "PROTACTINIUM" => "Pa", "URANIUM" => "U", "NEPTUNIUM" => "Np",
    "PLUTONIUM" => "Pu", "AMERICIUM" => "Am", "CURIUM" => "Cm",
    "BERKELIUM" => "Bk", "CALIFORNIUM" => "Cf", "EINSTEINIUM" => "Es",
    "FERMIUM" => "Fm", "MENDELEVIUM" => "Md", "NOBELIUM" => "No",
    "LAWRENCIUM" => "Lr", "RUTHERFORDIUM" => "Rf", "DUBNIUM" => "Db",
    "SEABORGIUM" => "Sg", "BOHRIUM" => "Bh", "HASSIUM" => "Hs",
    "MEITNERIUM" => "Mt", "DARMSTADTIUM" => "Ds", "ROENTGENIUM" => "Rg",
    "COPERNICIUM" => "Cn", "NIHONIUM" => "Nh", "FLEROVIUM" => "Fl",
    "MOSCOVIUM" => "Mc", "LIVERMORIUM" => "Lv", "TENNESSINE" => "Ts",
    "OGANESSON" => "Og",
    "ALUMINUM" => "Al", "CAESIUM" => "Cs", "SULPHUR" => "S",
};

/// Returns the English element name only if `symbol` is spelled in canonical
/// capitalisation (`"Cl"`, not `"cl"` or `"CL"`).
pub fn element_name(symbol: &str) -> Option<&'static str> {
    ELEMENT_NAMES.get(symbol).copied()
}

/// Returns the chemical symbol for an element name, ignoring case.
pub fn element_symbol(name: &str) -> Option<&'static str> {
    ELEMENT_SYMBOLS
        .get(name.trim().to_ascii_uppercase().as_str())
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_name_requires_canonical_capitalisation() {
        assert_eq!(element_name("Cl"), Some("Chlorine"));
        assert_eq!(element_name("cl"), None);
        assert_eq!(element_name("CL"), None);
        assert_eq!(element_name("C"), Some("Carbon"));
        assert_eq!(element_name("Og"), Some("Oganesson"));
        assert_eq!(element_name("Bq"), None);
        assert_eq!(element_name(""), None);
    }

    #[test]
    fn element_symbol_inverts_element_name() {
        assert_eq!(element_symbol("CARBON"), Some("C"));
        assert_eq!(element_symbol("hydrogen"), Some("H"));
        assert_eq!(element_symbol("Aluminum"), Some("Al"));
        assert_eq!(element_symbol("C"), None);
    }

    #[test]
    fn tables_cover_every_element_both_ways() {
        assert_eq!(ELEMENT_NAMES.len(), 118);
        for (symbol, name) in ELEMENT_NAMES.entries() {
            assert_eq!(element_symbol(name), Some(*symbol));
        }
    }
}

#[cfg(test)]
mod tests {
    use packparse::text_cleaning::clean_description;
    use packparse::unit_normalizer::{known_units, UnitNormalizer};
    use packparse::{CanonicalUnit, DescriptionParser};

    fn create_parser() -> DescriptionParser {
        DescriptionParser::new()
    }

    #[test]
    fn test_end_to_end_hyphenated_pack() {
        let parser = create_parser();
        let record = parser.parse("12-PK 12 FL OZ Coca Cola Cans");

        assert_eq!(record.original_description, "12-PK 12 FL OZ Coca Cola Cans");
        assert_eq!(record.product_name, "Coca Cola Cans");
        assert_eq!(record.product_count.to_string(), "12 COUNT");
        assert_eq!(record.product_size.unwrap().to_string(), "12 FLUID OUNCE");
    }

    #[test]
    fn test_end_to_end_pack_of_phrase() {
        let parser = create_parser();
        let record = parser.parse("Pack of 35 Nestle Water Bottles 16.9 oz");

        assert_eq!(record.product_count.to_string(), "35 COUNT");
        assert_eq!(record.product_size.unwrap().to_string(), "16.9 FLUID OUNCE");
        assert!(record.product_name.contains("Nestle Water Bottles"));
    }

    #[test]
    fn test_end_to_end_combo_form() {
        let parser = create_parser();
        let record = parser.parse("8 x 500ml Pepsi Max Bottles");

        assert_eq!(record.product_count.to_string(), "8 COUNT");
        assert_eq!(record.product_size.unwrap().to_string(), "500 ML");
        assert!(record.product_name.contains("Pepsi Max Bottles"));
    }

    #[test]
    fn test_end_to_end_plain_description() {
        let parser = create_parser();
        let record = parser.parse("Generic Snack Bag");

        assert_eq!(record.product_name, "Generic Snack Bag");
        assert_eq!(record.product_count.to_string(), "1 COUNT");
        assert_eq!(record.product_size, None);
    }

    #[test]
    fn test_parsing_is_deterministic() {
        let parser = create_parser();
        let inputs = [
            "12-PK 12 FL OZ Coca Cola Cans",
            "Pack of 35 Nestle Water Bottles 16.9 oz",
            "8 x 500ml Pepsi Max Bottles",
            "Generic Snack Bag",
            "",
            "?!# 1.5 LTR --- juice",
        ];
        for input in inputs {
            assert_eq!(parser.parse(input), parser.parse(input), "input '{}'", input);
        }
    }

    #[test]
    fn test_count_defaults_to_one_without_count_pattern() {
        let parser = create_parser();
        for input in ["Spring Water 2 L", "Generic Snack Bag", "Cola 16.9oz"] {
            let record = parser.parse(input);
            assert_eq!(record.product_count.to_string(), "1 COUNT", "input '{}'", input);
        }
    }

    #[test]
    fn test_size_is_absent_without_recognizable_unit() {
        let parser = create_parser();
        for input in ["24 CT Crayon Box", "Generic Snack Bag", "3 Musketeers Bar"] {
            let record = parser.parse(input);
            assert_eq!(record.product_size, None, "input '{}'", input);
        }
    }

    #[test]
    fn test_combo_count_takes_precedence() {
        let parser = create_parser();
        let record = parser.parse("8 X 500 ML");

        assert_eq!(record.product_count.to_string(), "8 COUNT");
        assert_eq!(record.product_size.unwrap().to_string(), "500 ML");
        // Nothing left over once the combo text is stripped.
        assert_eq!(record.product_name, "");
    }

    #[test]
    fn test_name_contains_neither_count_nor_size_text() {
        let parser = create_parser();
        let record = parser.parse("12-PK 12 FL OZ Coca Cola Cans");

        assert!(!record.product_name.contains("12-PK"));
        assert!(!record.product_name.contains("12 FL OZ"));
        assert!(record.product_name.contains("Coca Cola Cans"));
    }

    #[test]
    fn test_unit_table_closure() {
        let normalizer = UnitNormalizer::new();
        for (key, unit) in known_units() {
            assert_eq!(normalizer.normalize(key), Some(unit), "key '{}'", key);
        }
        assert_eq!(normalizer.normalize("XYZ"), None);
    }

    #[test]
    fn test_cleaning_is_idempotent() {
        let inputs = [
            "12-PK 12 FL OZ Coca Cola Cans",
            "Pack of 35 Nestle Water Bottles 16.9 oz",
            "  messy;;(input)!!  ",
            "",
        ];
        for input in inputs {
            let once = clean_description(input);
            assert_eq!(clean_description(&once), once, "input '{}'", input);
        }
    }

    #[test]
    fn test_canonical_unit_buckets() {
        let normalizer = UnitNormalizer::new();
        assert_eq!(normalizer.normalize("oz"), Some(CanonicalUnit::FluidOunce));
        assert_eq!(normalizer.normalize("ml"), Some(CanonicalUnit::Milliliter));
        assert_eq!(normalizer.normalize("ltr"), Some(CanonicalUnit::Liter));
        assert_eq!(normalizer.normalize("gal"), Some(CanonicalUnit::Gallon));
    }

    #[test]
    fn test_batch_parsing_maps_one_to_one() {
        let parser = create_parser();
        let inputs = [
            "12-PK 12 FL OZ Coca Cola Cans",
            "Generic Snack Bag",
            "8 x 500ml Pepsi Max Bottles",
        ];
        let records = parser.parse_all(inputs);

        assert_eq!(records.len(), inputs.len());
        for (input, record) in inputs.iter().zip(&records) {
            assert_eq!(&record.original_description, input);
            assert_eq!(record, &parser.parse(input));
        }
    }
}

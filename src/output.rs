//! CSV output for scraped pages.

use crate::error::Result;
use crate::product::Product;
use std::path::Path;

/// Column order of the per-page CSV files.
pub const CSV_HEADER: [&str; 5] = ["title", "description", "price", "rating", "num_of_reviews"];

/// Write one page's products to `path` as UTF-8 CSV.
///
/// The header row is written unconditionally, so a page with zero products
/// still produces a file containing exactly the header.
pub fn write_csv(products: &[Product], path: &Path) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    writer.write_record(CSV_HEADER)?;
    for product in products {
        writer.serialize(product)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product {
            title: "Acer Aspire ES1-512".to_string(),
            description: "Cheap notebook".to_string(),
            price: 299.0,
            rating: 3,
            num_of_reviews: 4,
        }
    }

    #[test]
    fn test_empty_page_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("home.csv");

        write_csv(&[], &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "title,description,price,rating,num_of_reviews\n");
    }

    #[test]
    fn test_one_row_per_product() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("laptops.csv");

        let products = vec![sample_product(), sample_product()];
        write_csv(&products, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 1 + products.len());
        assert_eq!(lines[1], "Acer Aspire ES1-512,Cheap notebook,299.0,3,4");
    }

    #[test]
    fn test_description_with_comma_is_quoted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tablets.csv");

        let product = Product {
            description: "Thin, light tablet".to_string(),
            ..sample_product()
        };
        write_csv(&[product], &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"Thin, light tablet\""));
    }
}

use shopadmin::{CategoryId, CategoryRecord, CategoryTree, ShopAdminError};

fn main() -> Result<(), ShopAdminError> {
    let tree = CategoryTree::from_records(vec![
        CategoryRecord::root(1_i64, "Electronics"),
        CategoryRecord::child(2_i64, "Phones", 1_i64),
        CategoryRecord::child(3_i64, "Accessories", 2_i64),
        CategoryRecord::root(4_i64, "Books"),
        CategoryRecord::child(5_i64, "Fiction", 4_i64),
    ])?;

    let moving = CategoryId::from(2_i64);
    println!("valid new parents for category {moving}:");
    for record in tree.eligible_parents(Some(&moving)) {
        println!("  [{}] {}", record.id, record.name);
    }

    println!("\nparents offered for a brand new category:");
    for record in tree.eligible_parents(None) {
        println!("  [{}] {}", record.id, record.name);
    }

    Ok(())
}

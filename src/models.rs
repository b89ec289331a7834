use serde::{Deserialize, Serialize};
use crate::enquiry::EntityRef;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Product {
    #[serde(default)]
    pub name: String,
    pub company_name: Option<String>,
    pub category_name: Option<String>,
    pub image: Option<String>,
    pub ingredients: Option<String>,
    pub usp: Option<String>,
    #[serde(default)]
    pub is_top: bool,
}

impl Product {
    pub fn subject(&self) -> EntityRef {
        EntityRef {
            company_name: self.company_name.clone(),
            category_name: self.category_name.clone(),
            name: Some(self.name.clone()),
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct ProductListing {
    #[serde(rename = "findProduct", default)]
    pub find_product: Vec<Product>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct CategoryListing {
    #[serde(rename = "allCategory")]
    pub all_category: Vec<Category>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Certificate {
    #[serde(default)]
    pub id: String,
    pub image: String,
    #[serde(default)]
    pub image_alt: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct BentoData {
    pub box1_image: String,
    pub value1_image: String,
    pub value2_image: String,
    pub value1_head: String,
    pub value2_head: String,
    pub value1_desc: String,
    pub value2_desc: String,
    pub contact_image: String,
}

#[derive(Deserialize, Debug)]
pub struct BentoEntry {
    pub service_bento: BentoData,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

#[derive(Deserialize, Debug)]
pub struct SendMessageResponse {
    pub ok: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_listing_tolerates_missing_optional_fields() {
        let body = r#"{"findProduct":[{"name":"Derma Gel","company_name":"Maxnova","is_top":true},{"name":"Tonic"}]}"#;
        let listing: ProductListing = serde_json::from_str(body).unwrap();
        assert_eq!(listing.find_product.len(), 2);
        assert!(listing.find_product[0].is_top);
        assert!(!listing.find_product[1].is_top);
        assert_eq!(listing.find_product[1].company_name, None);
    }

    #[test]
    fn product_subject_carries_company_category_and_name() {
        let product = Product {
            name: "Derma Gel".into(),
            company_name: Some("Maxnova".into()),
            category_name: Some("Derma".into()),
            image: None,
            ingredients: None,
            usp: None,
            is_top: true,
        };
        let subject = product.subject();
        assert_eq!(subject.breadcrumb(), "Maxnova > Derma > Derma Gel");
    }

    #[test]
    fn category_reads_mongo_style_id() {
        let body = r#"{"allCategory":[{"_id":"abc","name":"Dermatology","description":"Skin care. More text."}]}"#;
        let listing: CategoryListing = serde_json::from_str(body).unwrap();
        assert_eq!(listing.all_category[0].id, "abc");
    }

    #[test]
    fn contact_message_serializes_camel_case() {
        let message = ContactMessage {
            full_name: "Asha".into(),
            phone: "9034061629".into(),
            email: "asha@example.com".into(),
            message: "Hello".into(),
        };
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["fullName"], "Asha");
        assert_eq!(value["phone"], "9034061629");
        assert!(value.get("full_name").is_none());
    }
}

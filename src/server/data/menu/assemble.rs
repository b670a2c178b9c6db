//! Catalog graph assembler.
//!
//! Roots and sub-products come from separate row sets; sub-products are re-attached to their
//! parent by `by_product_of` once both are loaded.

use std::collections::HashMap;

use entity::{configurable_attribute_option, product};

use crate::{
    model::{
        menu::{
            ComponentCategoryDto, ComponentDto, DelayDto, MenuAttributeDto, MenuConfigurationDto,
            MenuDto, MenuOptionDto, MenuProductDto, ProductCategoryDto, MENU_STATUS_OK,
        },
        order::ComponentUsageDto,
    },
    server::data::{
        batch::group_by,
        menu::fetch::MenuBatch,
        order::{assemble::component_usage_dto, rows::AttributeRow},
    },
};

/// Builds the full catalog.
pub fn assemble(batch: MenuBatch) -> MenuDto {
    let tva: HashMap<i32, f64> = batch
        .tva_rates
        .iter()
        .map(|rate| (rate.tva_id, rate.tva_rate))
        .collect();

    let components = group_by(batch.components, |row| row.product_id, component_usage_dto);
    let options = group_by(
        batch.options,
        |option| option.configurable_attribute_id,
        option_dto,
    );
    let attributes = group_by(
        batch.attributes,
        |row| row.product_id,
        |row| attribute_dto(row, &options),
    );

    let catalog = Catalog {
        tva,
        components,
        attributes,
    };

    let mut sub_products: HashMap<i32, Vec<MenuProductDto>> = HashMap::new();
    for sub_product in batch.sub_products {
        let Some(parent_id) = sub_product.by_product_of else {
            continue;
        };
        sub_products
            .entry(parent_id)
            .or_default()
            .push(catalog.product(sub_product));
    }

    let mut roots = group_by(
        batch.roots,
        |root| root.category,
        |root| {
            let mut dto = catalog.product(root);
            dto.sub_products = sub_products.remove(&dto.product_id).unwrap_or_default();
            dto
        },
    );

    for (parent_id, orphans) in &sub_products {
        tracing::warn!(
            parent_id,
            count = orphans.len(),
            "sub-products dropped, parent is not a menu root"
        );
    }

    let products_types = batch
        .categories
        .into_iter()
        .map(|category| ProductCategoryDto {
            products: roots
                .remove(&Some(category.merchant_categ_id))
                .unwrap_or_default(),
            category: category.categ_name,
            category_id: category.merchant_categ_id,
            order: category.categ_order,
            bg_color: category.bg_color,
        })
        .collect();

    if !roots.is_empty() {
        tracing::debug!(
            categories = roots.len(),
            "root products outside any visible category dropped"
        );
    }

    let mut by_category = HashMap::<i32, Vec<_>>::new();
    for component in batch.all_components {
        if let Some(category_id) = component.category_id {
            by_category.entry(category_id).or_default().push(component);
        }
    }

    let components_types = batch
        .component_categories
        .into_iter()
        .map(|category| ComponentCategoryDto {
            components: by_category
                .remove(&category.merchant_categ_id)
                .unwrap_or_default()
                .into_iter()
                .map(|component| ComponentDto {
                    component_id: component.component_id,
                    name: component.name,
                    category: Some(category.name.clone()),
                    price: component.component_price,
                    status: component.status,
                })
                .collect(),
            category: category.name,
            order: category.categ_order,
        })
        .collect();

    let delays = batch
        .delays
        .into_iter()
        .map(|delay| DelayDto {
            delay_id: delay.id,
            short_description: delay.short_description,
            duration: delay.duration,
        })
        .collect();

    MenuDto {
        status: MENU_STATUS_OK.to_string(),
        last_menu_update: batch.version,
        products_types,
        components_types,
        delays,
    }
}

/// Per-product lookups shared by roots and sub-products.
struct Catalog {
    tva: HashMap<i32, f64>,
    components: HashMap<i32, Vec<ComponentUsageDto>>,
    attributes: HashMap<i32, Vec<MenuAttributeDto>>,
}

impl Catalog {
    fn rate(&self, tva_id: i32) -> f64 {
        self.tva.get(&tva_id).copied().unwrap_or_default()
    }

    fn product(&self, product: product::Model) -> MenuProductDto {
        MenuProductDto {
            tva_rate_in: self.rate(product.tva_in_id),
            tva_rate_delivery: self.rate(product.tva_delivery_id),
            tva_rate_take_away: self.rate(product.tva_take_away_id),
            components: self
                .components
                .get(&product.product_id)
                .cloned()
                .unwrap_or_default(),
            configuration: MenuConfigurationDto {
                attributes: self
                    .attributes
                    .get(&product.product_id)
                    .cloned()
                    .unwrap_or_default(),
            },
            sub_products: Vec::new(),
            product_id: product.product_id,
            by_product_of: product.by_product_of,
            name: product.name,
            description: product.product_desc,
            image_url: product.image_url,
            is_popular: product.is_popular,
            is_available_on_sno: product.is_available_on_sno,
            price: product.price,
            price_take_away: product.price_take_away,
            price_delivery: product.price_delivery,
            available_in: product.available_in,
            available_take_away: product.available_take_away,
            available_delivery: product.available_delivery,
            category: product.category,
            is_product_group: product.is_product_group,
            bg_color: product.bg_color,
            production_color: product.production_color,
            status: product.status,
        }
    }
}

fn attribute_dto(row: AttributeRow, options: &HashMap<i32, Vec<MenuOptionDto>>) -> MenuAttributeDto {
    MenuAttributeDto {
        options: options.get(&row.id).cloned().unwrap_or_default(),
        id: row.id,
        product_id: row.product_id,
        title: row.title,
        max_options: row.max_options,
        min_options: row.min_options,
        attribute_type: row.attribute_type,
    }
}

fn option_dto(option: configurable_attribute_option::Model) -> MenuOptionDto {
    MenuOptionDto {
        id: option.id,
        configurable_attribute_id: option.configurable_attribute_id,
        title: option.title,
        extra_price: option.extra_price,
        max_quantity: option.max_quantity,
    }
}

#[cfg(test)]
mod tests {
    use entity::{component, component_category, delay, product_category, tva_category};

    use super::*;
    use crate::server::data::order::rows::ComponentUsageRow;

    fn product(product_id: i32, category: Option<i32>, by_product_of: Option<i32>) -> product::Model {
        product::Model {
            product_id,
            merchant_id: 1,
            by_product_of,
            category,
            name: format!("Product {product_id}"),
            product_desc: None,
            price: 1000,
            price_take_away: 900,
            price_delivery: 1100,
            tva_in_id: 1,
            tva_delivery_id: 2,
            tva_take_away_id: 2,
            bg_color: None,
            is_product_group: false,
            status: 1,
            is_available_on_sno: true,
            is_popular: false,
            image_url: None,
            production_color: None,
            available_in: true,
            available_take_away: true,
            available_delivery: true,
            available: true,
            enabled: true,
        }
    }

    fn category(merchant_categ_id: i32, categ_order: i32) -> product_category::Model {
        product_category::Model {
            merchant_categ_id,
            merchant_id: 1,
            categ_name: format!("Category {merchant_categ_id}"),
            categ_order,
            bg_color: None,
            available: true,
            enabled: true,
        }
    }

    #[test]
    fn sub_products_are_attached_to_their_root() {
        let batch = MenuBatch {
            categories: vec![category(10, 0)],
            roots: vec![product(1, Some(10), None)],
            sub_products: vec![product(2, Some(10), Some(1)), product(3, Some(10), Some(99))],
            ..Default::default()
        };

        let menu = assemble(batch);

        let products = &menu.products_types[0].products;
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].product_id, 1);
        assert_eq!(products[0].sub_products.len(), 1);
        assert_eq!(products[0].sub_products[0].product_id, 2);
        assert!(products[0].sub_products[0].sub_products.is_empty());
    }

    #[test]
    fn categories_keep_query_order_and_empty_ones_stay() {
        let batch = MenuBatch {
            categories: vec![category(20, 0), category(10, 1)],
            roots: vec![product(1, Some(10), None), product(2, None, None)],
            ..Default::default()
        };

        let menu = assemble(batch);

        assert_eq!(menu.status, MENU_STATUS_OK);
        let ids: Vec<i32> = menu.products_types.iter().map(|c| c.category_id).collect();
        assert_eq!(ids, vec![20, 10]);
        assert!(menu.products_types[0].products.is_empty());
        assert_eq!(menu.products_types[1].products.len(), 1);
    }

    #[test]
    fn product_carries_tva_components_and_configuration() {
        let batch = MenuBatch {
            categories: vec![category(10, 0)],
            roots: vec![product(1, Some(10), None), product(2, Some(10), None)],
            tva_rates: vec![
                tva_category::Model { tva_id: 1, tva_rate: 10.0 },
                tva_category::Model { tva_id: 2, tva_rate: 5.5 },
            ],
            components: vec![ComponentUsageRow {
                product_id: 1,
                component_id: 7,
                name: "Tomato".to_string(),
                price: 50,
                status: 1,
                quantity: 2.0,
                unit_of_measure: "g".to_string(),
            }],
            attributes: vec![AttributeRow {
                product_id: 1,
                num_order: 0,
                id: 3,
                title: "Cooking".to_string(),
                max_options: 1,
                min_options: 1,
                attribute_type: "SINGLE".to_string(),
            }],
            options: vec![configurable_attribute_option::Model {
                id: 4,
                configurable_attribute_id: 3,
                title: "Rare".to_string(),
                extra_price: 0,
                max_quantity: 1,
                enabled: true,
            }],
            ..Default::default()
        };

        let menu = assemble(batch);
        let products = &menu.products_types[0].products;

        assert_eq!(products[0].tva_rate_in, 10.0);
        assert_eq!(products[0].tva_rate_delivery, 5.5);
        assert_eq!(products[0].components.len(), 1);
        assert_eq!(products[0].configuration.attributes.len(), 1);
        assert_eq!(products[0].configuration.attributes[0].options[0].title, "Rare");

        assert!(products[1].components.is_empty());
        assert!(products[1].configuration.attributes.is_empty());
        assert!(products[1].sub_products.is_empty());
    }

    #[test]
    fn components_are_grouped_under_their_category() {
        let component = |component_id, category_id| component::Model {
            component_id,
            merchant_id: 1,
            category_id,
            name: format!("Component {component_id}"),
            component_price: 10,
            status: 1,
            available: true,
        };
        let batch = MenuBatch {
            component_categories: vec![component_category::Model {
                merchant_categ_id: 5,
                merchant_id: 1,
                name: "Sauces".to_string(),
                categ_order: 0,
                available: true,
            }],
            all_components: vec![component(1, Some(5)), component(2, None), component(3, Some(6))],
            delays: vec![delay::Model {
                id: 1,
                short_description: "15 min".to_string(),
                duration: 15,
                enabled: true,
            }],
            ..Default::default()
        };

        let menu = assemble(batch);

        assert_eq!(menu.components_types.len(), 1);
        assert_eq!(menu.components_types[0].components.len(), 1);
        assert_eq!(
            menu.components_types[0].components[0].category.as_deref(),
            Some("Sauces")
        );
        assert_eq!(menu.delays[0].duration, 15);
    }
}

//! Order graph assembler.
//!
//! Turns the flat row sets of an `OrderBatch` into `OrderDto` trees using hash lookups
//! only. Children keep the order their query returned them in, and every collection is
//! present (possibly empty) whether or not child rows existed.

use std::collections::HashMap;

use entity::{configurable_attribute_option, customer, order, payment, user};

use crate::{
    model::order::{
        ComponentUsageDto, ConfigurationAttributeDto, ConfigurationDto, ConfigurationOptionDto,
        CustomerDto, LocationDto, OrderCommentDto, OrderDto, OrderExtraDto, OrderProductDto,
        OrderWithoutDto, PaymentDto, ResponsibleDto, SnoClientDto,
    },
    server::{
        data::{
            batch::group_by,
            order::{
                fetch::OrderBatch,
                rows::{AttributeRow, CommentRow, ComponentUsageRow, OrderItemRow},
            },
        },
        model::order::ResponsibleRef,
    },
};

/// Builds the order trees, in header order.
pub fn assemble(batch: OrderBatch) -> Vec<OrderDto> {
    let OrderBatch {
        headers,
        memberships,
        items,
        comments,
        components,
        extras,
        withouts,
        payments,
        sno_clients,
        locations,
        attributes,
        options,
        selections,
        responsibles,
        tva_rates,
    } = batch;

    let tva: HashMap<i32, f64> = tva_rates
        .into_iter()
        .map(|rate| (rate.tva_id, rate.tva_rate))
        .collect();

    let mut sessions: HashMap<i32, (i32, Option<i64>)> = HashMap::new();
    for membership in memberships {
        sessions
            .entry(membership.order_id)
            .or_insert((membership.delivery_session_id, membership.priority));
    }

    let responsibles: HashMap<i32, user::Model> = responsibles
        .into_iter()
        .map(|user| (user.user_id, user))
        .collect();

    let (order_level, item_level): (Vec<CommentRow>, Vec<CommentRow>) = comments
        .into_iter()
        .partition(|comment| comment.order_item_id.is_none());
    let mut order_comments = group_by(order_level, |row| row.order_id, comment_dto);
    // One comment per line: the oldest wins.
    let mut item_comments: HashMap<i32, OrderCommentDto> = HashMap::new();
    for row in item_level {
        if let Some(order_item_id) = row.order_item_id {
            item_comments
                .entry(order_item_id)
                .or_insert_with(|| comment_dto(row));
        }
    }

    let components = group_by(components, |row| row.product_id, component_usage_dto);
    let mut extras = group_by(
        extras,
        |row| row.order_item_id,
        |row| OrderExtraDto {
            id: row.id,
            order_item_id: row.order_item_id,
            order_id: row.order_id,
            product_id: row.product_id,
            name: row.name,
            component_id: row.component_id,
            price: row.price,
        },
    );
    let mut withouts = group_by(
        withouts,
        |row| row.order_item_id,
        |row| OrderWithoutDto {
            id: row.id,
            order_item_id: row.order_item_id,
            order_id: row.order_id,
            product_id: row.product_id,
            name: row.name,
            component_id: row.component_id,
            price: row.price,
        },
    );
    let mut payments = group_by(payments, |row| row.order_id, payment_dto);
    let mut sno_clients = group_by(
        sno_clients,
        |row| row.order_item_id,
        |row| SnoClientDto {
            user_code: row.user_code,
            user_name: row.user_name,
            quantity: row.quantity,
        },
    );
    let mut locations = group_by(
        locations,
        |row| row.order_id,
        |row| LocationDto {
            order_id: row.order_id,
            location_id: row.location_id,
            location_name: row.location_name,
            location_desc: row.location_desc,
        },
    );

    let attributes = group_by(attributes, |row| row.product_id, |row| row);
    let options = group_by(options, |row| row.configurable_attribute_id, |row| row);
    let mut selected: HashMap<(i32, i32), i32> = HashMap::new();
    for selection in selections {
        selected
            .entry((
                selection.order_item_id,
                selection.configuration_attribute_option_id,
            ))
            .or_insert(selection.quantity);
    }

    let mut products = group_by(
        items,
        |row| row.order_id,
        |row| {
            let order_item_id = row.order_item_id;
            let product_id = row.product_id;
            let configuration = configuration(
                order_item_id,
                attributes.get(&product_id).map(Vec::as_slice).unwrap_or_default(),
                &options,
                &selected,
            );

            product_line(
                row,
                &tva,
                ProductChildren {
                    extra: extras.remove(&order_item_id).unwrap_or_default(),
                    without: withouts.remove(&order_item_id).unwrap_or_default(),
                    components: components.get(&product_id).cloned().unwrap_or_default(),
                    customers: sno_clients.remove(&order_item_id).unwrap_or_default(),
                    comment: item_comments.remove(&order_item_id).unwrap_or_default(),
                    configuration,
                },
            )
        },
    );

    headers
        .into_iter()
        .map(|(order, customer)| {
            let order_id = order.order_id;
            let (delivery_session_id, priority) = sessions
                .get(&order_id)
                .map(|(session_id, priority)| (Some(*session_id), *priority))
                .unwrap_or((None, None));

            OrderChildren {
                customer: customer
                    .map(|customer| customer_dto(customer, order.use_customer_temporary_address)),
                comments: order_comments.remove(&order_id).unwrap_or_default(),
                payments: payments.remove(&order_id).unwrap_or_default(),
                location: locations.remove(&order_id).unwrap_or_default(),
                products: products.remove(&order_id).unwrap_or_default(),
                delivery_session_id,
                priority,
            }
            .attach(order, &responsibles)
        })
        .collect()
}

struct OrderChildren {
    customer: Option<CustomerDto>,
    comments: Vec<OrderCommentDto>,
    payments: Vec<PaymentDto>,
    location: Vec<LocationDto>,
    products: Vec<OrderProductDto>,
    delivery_session_id: Option<i32>,
    priority: Option<i64>,
}

impl OrderChildren {
    fn attach(self, order: order::Model, responsibles: &HashMap<i32, user::Model>) -> OrderDto {
        let responsible_ref = ResponsibleRef::parse(order.responsible.as_deref());
        let responsible = responsible_ref
            .user_id()
            .and_then(|user_id| responsibles.get(&user_id))
            .map(|user| ResponsibleDto {
                id: user.user_id,
                lat: user.lat,
                lng: user.lng,
                tel: user.tel.clone(),
                name: Some(user.user_name.clone()),
            });

        OrderDto {
            order_id: order.order_id,
            order_num: order.order_num,
            brand: order.brand,
            brand_order_id: order.brand_order_id,
            brand_order_num: order.brand_order_num,
            brand_status: order.brand_status,
            order_type: order.order_type,
            cutlery_notes: order.cutlery_notes,
            state: order.state,
            scheduled: order.scheduled,
            ttc: order.price,
            tva: order.tva,
            ht: order.ht,
            places_settings: order.places_settings,
            pager_number: order.pager_number,
            is_paid: i32::from(order.is_paid),
            is_distributed: i32::from(order.is_distributed),
            is_sno: responsible_ref == ResponsibleRef::ScanAndOrder,
            call_hour: order.date_call,
            estimated_ready: order.estimated_ready,
            is_delivery: i32::from(order.is_delivery),
            merchant_approval: order.merchant_approval,
            delivery_fees: order.delivery_fees,
            customer: self.customer,
            comments: self.comments,
            payments: self.payments,
            responsible,
            location: self.location,
            products: self.products,
            delivery_session_id: self.delivery_session_id,
            priority: self.priority,
            creation_date: order.creation_date,
            fulfillment_type: order.fulfillment_type,
            last_update: order.last_update,
        }
    }
}

struct ProductChildren {
    extra: Vec<OrderExtraDto>,
    without: Vec<OrderWithoutDto>,
    components: Vec<ComponentUsageDto>,
    customers: Vec<SnoClientDto>,
    comment: OrderCommentDto,
    configuration: ConfigurationDto,
}

fn product_line(
    row: OrderItemRow,
    tva: &HashMap<i32, f64>,
    children: ProductChildren,
) -> OrderProductDto {
    let rate = |tva_id: i32| tva.get(&tva_id).copied().unwrap_or_default();

    OrderProductDto {
        order_id: row.order_id,
        order_item_id: row.order_item_id,
        ordered_on: row.ordered_on,
        product_id: row.product_id,
        production_status: row.production_status,
        production_status_done_quantity: row.production_status_done_quantity,
        name: row.name,
        image_url: row.image_url,
        category: row.category_name,
        description: row.description,
        quantity: row.quantity,
        paid_quantity: row.paid_quantity,
        distributed_quantity: row.distributed_quantity,
        ready_for_distribution_quantity: row.ready_for_distribution_quantity,
        is_paid: i32::from(row.is_paid),
        is_distributed: i32::from(row.is_distributed),
        price: row.price,
        price_take_away: row.price_take_away,
        price_delivery: row.price_delivery,
        discount_id: row.discount_id,
        discount_name: row.discount_name,
        discounted_price: row.discount_id.map(|_| row.price),
        tva_rate_in: rate(row.tva_in_id),
        tva_rate_delivery: rate(row.tva_delivery_id),
        tva_rate_take_away: rate(row.tva_take_away_id),
        available_in: i32::from(row.available_in),
        available_take_away: i32::from(row.available_take_away),
        available_delivery: i32::from(row.available_delivery),
        production_color: row.production_color,
        extra: children.extra,
        without: children.without,
        components: children.components,
        customers: children.customers,
        comment: children.comment,
        configuration: children.configuration,
    }
}

/// Attribute templates of the line's product, with the line's picks marked as selected.
fn configuration(
    order_item_id: i32,
    attributes: &[AttributeRow],
    options: &HashMap<i32, Vec<configurable_attribute_option::Model>>,
    selected: &HashMap<(i32, i32), i32>,
) -> ConfigurationDto {
    let attributes = attributes
        .iter()
        .map(|attribute| ConfigurationAttributeDto {
            id: attribute.id,
            product_id: attribute.product_id,
            order_item_id,
            title: attribute.title.clone(),
            max_options: attribute.max_options,
            min_options: attribute.min_options,
            attribute_type: attribute.attribute_type.clone(),
            options: options
                .get(&attribute.id)
                .map(Vec::as_slice)
                .unwrap_or_default()
                .iter()
                .map(|option| {
                    let quantity = selected.get(&(order_item_id, option.id)).copied();
                    ConfigurationOptionDto {
                        id: option.id,
                        configurable_attribute_id: option.configurable_attribute_id,
                        order_item_id,
                        title: option.title.clone(),
                        extra_price: option.extra_price,
                        max_quantity: option.max_quantity,
                        quantity: quantity.unwrap_or(0),
                        selected: i32::from(quantity.is_some()),
                    }
                })
                .collect(),
        })
        .collect();

    ConfigurationDto { attributes }
}

/// Picks the permanent or temporary address block according to the order's flag.
pub fn customer_dto(customer: customer::Model, use_temporary_address: bool) -> CustomerDto {
    let (address, lat, lng, floor, door, additional) = if use_temporary_address {
        (
            customer.customer_temporary_address,
            customer.customer_temporary_lat,
            customer.customer_temporary_lng,
            customer.customer_temporary_floor_number,
            customer.customer_temporary_door_number,
            customer.customer_temporary_additional_address,
        )
    } else {
        (
            customer.customer_address,
            customer.customer_lat,
            customer.customer_lng,
            customer.customer_floor_number,
            customer.customer_door_number,
            customer.customer_additional_address,
        )
    };

    CustomerDto {
        customer_id: customer.customer_id,
        customer_name: customer.customer_name,
        customer_tel: customer.customer_tel,
        customer_temporary_phone: customer.customer_temporary_phone,
        customer_temporary_phone_code: customer.customer_temporary_phone_code,
        customer_nb_orders: customer.customer_nb_orders,
        customer_additional_info: customer.customer_additional_info,
        customer_zone_code: customer.customer_zone_code,
        customer_address: address,
        customer_lat: lat,
        customer_lng: lng,
        customer_floor_number: floor,
        customer_door_number: door,
        customer_additional_address: additional,
    }
}

fn comment_dto(row: CommentRow) -> OrderCommentDto {
    OrderCommentDto {
        order_id: row.order_id,
        order_item_id: row.order_item_id,
        user_name: row.user_name,
        content: row.content,
        creation_date: row.creation_date,
    }
}

pub fn component_usage_dto(row: ComponentUsageRow) -> ComponentUsageDto {
    ComponentUsageDto {
        component_id: row.component_id,
        product_id: row.product_id,
        name: row.name,
        price: row.price,
        status: row.status,
        quantity: row.quantity,
        unit_of_measure: row.unit_of_measure,
    }
}

pub fn payment_dto(payment: payment::Model) -> PaymentDto {
    PaymentDto {
        order_id: payment.order_id,
        payment_id: payment.payment_id,
        mop: payment.mop,
        amount: payment.amount,
        payment_date: payment.payment_date,
        enabled: i32::from(payment.enabled),
    }
}

#[cfg(test)]
mod tests {
    use entity::order_item_configuration;

    use super::*;
    use crate::server::data::order::rows::{ExtraRow, SessionMembershipRow};

    fn header(order_id: i32, responsible: &str) -> order::Model {
        order::Model {
            order_id,
            merchant_id: 1,
            customer_id: None,
            order_num: Some(order_id.to_string()),
            order_type: Some("IN".to_string()),
            state: Some("OPEN".to_string()),
            scheduled: false,
            brand: None,
            brand_status: None,
            brand_order_id: None,
            brand_order_num: None,
            estimated_ready: None,
            price: 1000,
            tva: None,
            ht: None,
            cutlery_notes: None,
            is_paid: false,
            is_distributed: false,
            date_call: None,
            is_delivery: false,
            merchant_approval: None,
            delivery_fees: None,
            fulfillment_type: None,
            use_customer_temporary_address: false,
            places_settings: None,
            pager_number: None,
            responsible: Some(responsible.to_string()),
            creation_date: None,
            last_update: None,
        }
    }

    fn line(order_id: i32, order_item_id: i32, product_id: i32) -> OrderItemRow {
        OrderItemRow {
            order_item_id,
            order_id,
            product_id,
            quantity: 1,
            paid_quantity: 0,
            distributed_quantity: 0,
            ready_for_distribution_quantity: 0,
            is_paid: false,
            is_distributed: false,
            price: 450,
            discount_id: None,
            ordered_on: None,
            production_status: None,
            production_status_done_quantity: 0,
            name: format!("Product {product_id}"),
            image_url: None,
            description: None,
            price_take_away: 450,
            price_delivery: 500,
            tva_in_id: 1,
            tva_delivery_id: 1,
            tva_take_away_id: 2,
            available_in: true,
            available_take_away: true,
            available_delivery: false,
            production_color: None,
            category_name: Some("Burgers".to_string()),
            discount_name: None,
        }
    }

    fn option(id: i32, attribute_id: i32) -> configurable_attribute_option::Model {
        configurable_attribute_option::Model {
            id,
            configurable_attribute_id: attribute_id,
            title: format!("Option {id}"),
            extra_price: 0,
            max_quantity: 3,
            enabled: true,
        }
    }

    fn customer(use_marker: &str) -> customer::Model {
        customer::Model {
            customer_id: 9,
            merchant_id: 1,
            customer_name: Some("Ada".to_string()),
            customer_tel: None,
            customer_temporary_phone: None,
            customer_temporary_phone_code: None,
            customer_nb_orders: Some(4),
            customer_additional_info: None,
            customer_zone_code: None,
            customer_address: Some(format!("{use_marker} permanent")),
            customer_lat: Some(1.0),
            customer_lng: Some(2.0),
            customer_floor_number: Some("3".to_string()),
            customer_door_number: None,
            customer_additional_address: None,
            customer_temporary_address: Some(format!("{use_marker} temporary")),
            customer_temporary_lat: Some(10.0),
            customer_temporary_lng: Some(20.0),
            customer_temporary_floor_number: None,
            customer_temporary_door_number: Some("B".to_string()),
            customer_temporary_additional_address: None,
        }
    }

    #[test]
    fn order_without_children_has_empty_collections() {
        let orders = assemble(OrderBatch {
            headers: vec![(header(1, "0"), None)],
            ..Default::default()
        });

        assert_eq!(orders.len(), 1);
        let order = &orders[0];
        assert!(order.products.is_empty());
        assert!(order.payments.is_empty());
        assert!(order.comments.is_empty());
        assert!(order.location.is_empty());
        assert!(order.customer.is_none());
        assert!(order.responsible.is_none());
        assert!(!order.is_sno);
        assert_eq!(order.delivery_session_id, None);
    }

    #[test]
    fn lines_without_attributes_get_an_empty_configuration() {
        let orders = assemble(OrderBatch {
            headers: vec![(header(1, "0"), None)],
            items: vec![line(1, 11, 100)],
            ..Default::default()
        });

        let product = &orders[0].products[0];
        assert!(product.configuration.attributes.is_empty());
        assert!(product.extra.is_empty());
        assert!(product.without.is_empty());
        assert!(product.components.is_empty());
        assert!(product.customers.is_empty());
        assert_eq!(product.comment, OrderCommentDto::default());
    }

    #[test]
    fn options_are_selected_only_with_a_selection_row() {
        let attribute = AttributeRow {
            product_id: 100,
            num_order: 1,
            id: 3,
            title: "Cooking".to_string(),
            max_options: 1,
            min_options: 1,
            attribute_type: "SINGLE".to_string(),
        };

        let orders = assemble(OrderBatch {
            headers: vec![(header(1, "0"), None)],
            items: vec![line(1, 11, 100), line(1, 12, 100)],
            attributes: vec![attribute],
            options: vec![option(31, 3), option(32, 3)],
            selections: vec![order_item_configuration::Model {
                id: 1,
                order_item_id: 11,
                configuration_attribute_option_id: 31,
                quantity: 2,
            }],
            ..Default::default()
        });

        let picked = &orders[0].products[0].configuration.attributes[0].options;
        assert_eq!((picked[0].selected, picked[0].quantity), (1, 2));
        assert_eq!((picked[1].selected, picked[1].quantity), (0, 0));

        let untouched = &orders[0].products[1].configuration.attributes[0].options;
        assert!(untouched.iter().all(|o| o.selected == 0 && o.quantity == 0));
        assert!(untouched.iter().all(|o| o.order_item_id == 12));
    }

    #[test]
    fn children_keep_query_order() {
        let extra = |id: i32| ExtraRow {
            id,
            order_item_id: 11,
            order_id: 1,
            product_id: 100,
            component_id: id * 10,
            price: 0.5,
            name: format!("Extra {id}"),
        };

        let orders = assemble(OrderBatch {
            headers: vec![(header(2, "0"), None), (header(1, "0"), None)],
            items: vec![line(1, 11, 100)],
            extras: vec![extra(7), extra(3), extra(5)],
            ..Default::default()
        });

        assert_eq!(orders[0].order_id, 2);
        assert_eq!(orders[1].order_id, 1);
        let ids: Vec<i32> = orders[1].products[0].extra.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![7, 3, 5]);
    }

    #[test]
    fn first_item_comment_wins_and_order_comments_stay_separate() {
        let comment = |order_item_id: Option<i32>, content: &str| CommentRow {
            order_id: 1,
            order_item_id,
            content: content.to_string(),
            creation_date: None,
            user_name: None,
        };

        let orders = assemble(OrderBatch {
            headers: vec![(header(1, "0"), None)],
            items: vec![line(1, 11, 100)],
            comments: vec![
                comment(None, "ring twice"),
                comment(Some(11), "no onions"),
                comment(Some(11), "well done"),
            ],
            ..Default::default()
        });

        assert_eq!(orders[0].comments.len(), 1);
        assert_eq!(orders[0].comments[0].content, "ring twice");
        assert_eq!(orders[0].products[0].comment.content, "no onions");
    }

    #[test]
    fn responsible_is_resolved_from_the_user_rows() {
        let driver = user::Model {
            user_id: 5,
            merchant_id: 1,
            user_name: "jdoe".to_string(),
            first_name: None,
            last_name: None,
            tel: Some("0600000000".to_string()),
            lat: Some(45.7),
            lng: Some(4.8),
            profile_picture: None,
            planning_color: None,
            token: "t".to_string(),
            access_reception: false,
            access_delivery: true,
            access_waiter: false,
        };

        let orders = assemble(OrderBatch {
            headers: vec![
                (header(1, "5"), None),
                (header(2, "-1"), None),
                (header(3, "77"), None),
            ],
            responsibles: vec![driver],
            ..Default::default()
        });

        let responsible = orders[0].responsible.as_ref().unwrap();
        assert_eq!(responsible.id, 5);
        assert_eq!(responsible.name.as_deref(), Some("jdoe"));
        assert!(!orders[0].is_sno);

        assert!(orders[1].responsible.is_none());
        assert!(orders[1].is_sno);

        assert!(orders[2].responsible.is_none());
        assert!(!orders[2].is_sno);
    }

    #[test]
    fn session_membership_sets_id_and_priority() {
        let orders = assemble(OrderBatch {
            headers: vec![(header(1, "0"), None)],
            memberships: vec![SessionMembershipRow {
                delivery_session_id: 4,
                order_id: 1,
                priority: Some(2),
            }],
            ..Default::default()
        });

        assert_eq!(orders[0].delivery_session_id, Some(4));
        assert_eq!(orders[0].priority, Some(2));
    }

    #[test]
    fn temporary_address_replaces_the_whole_block() {
        let permanent = customer_dto(customer("home"), false);
        let temporary = customer_dto(customer("home"), true);

        assert_eq!(permanent.customer_address.as_deref(), Some("home permanent"));
        assert_eq!(permanent.customer_floor_number.as_deref(), Some("3"));
        assert_eq!(permanent.customer_door_number, None);

        assert_eq!(temporary.customer_address.as_deref(), Some("home temporary"));
        assert_eq!(temporary.customer_lat, Some(10.0));
        assert_eq!(temporary.customer_floor_number, None);
        assert_eq!(temporary.customer_door_number.as_deref(), Some("B"));
        assert_eq!(temporary.customer_name.as_deref(), Some("Ada"));
    }

    #[test]
    fn discount_exposes_the_discounted_price() {
        let mut discounted = line(1, 11, 100);
        discounted.discount_id = Some(2);
        discounted.discount_name = Some("Happy hour".to_string());

        let orders = assemble(OrderBatch {
            headers: vec![(header(1, "0"), None)],
            items: vec![discounted, line(1, 12, 100)],
            tva_rates: vec![
                entity::tva_category::Model {
                    tva_id: 1,
                    tva_rate: 10.0,
                },
                entity::tva_category::Model {
                    tva_id: 2,
                    tva_rate: 5.5,
                },
            ],
            ..Default::default()
        });

        let products = &orders[0].products;
        assert_eq!(products[0].discounted_price, Some(450));
        assert_eq!(products[1].discounted_price, None);
        assert_eq!(products[0].tva_rate_in, 10.0);
        assert_eq!(products[0].tva_rate_take_away, 5.5);
    }
}

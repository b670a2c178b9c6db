pub use super::booked_location::Entity as BookedLocation;
pub use super::booking::Entity as Booking;
pub use super::component::Entity as Component;
pub use super::component_category::Entity as ComponentCategory;
pub use super::configurable_attribute::Entity as ConfigurableAttribute;
pub use super::configurable_attribute_option::Entity as ConfigurableAttributeOption;
pub use super::customer::Entity as Customer;
pub use super::delay::Entity as Delay;
pub use super::delivery_session::Entity as DeliverySession;
pub use super::delivery_session_order::Entity as DeliverySessionOrder;
pub use super::discount::Entity as Discount;
pub use super::extra::Entity as Extra;
pub use super::floor::Entity as Floor;
pub use super::floor_area::Entity as FloorArea;
pub use super::hours_of_operation::Entity as HoursOfOperation;
pub use super::integration_uber_eats::Entity as IntegrationUberEats;
pub use super::location::Entity as Location;
pub use super::merchant::Entity as Merchant;
pub use super::merchant_parameters::Entity as MerchantParameters;
pub use super::order::Entity as Order;
pub use super::order_comment::Entity as OrderComment;
pub use super::order_item::Entity as OrderItem;
pub use super::order_item_configuration::Entity as OrderItemConfiguration;
pub use super::order_location::Entity as OrderLocation;
pub use super::payment::Entity as Payment;
pub use super::product::Entity as Product;
pub use super::product_category::Entity as ProductCategory;
pub use super::product_configurable_attribute::Entity as ProductConfigurableAttribute;
pub use super::recipe::Entity as Recipe;
pub use super::requires::Entity as Requires;
pub use super::scannorder_session::Entity as ScannorderSession;
pub use super::session_order_item::Entity as SessionOrderItem;
pub use super::tva_category::Entity as TvaCategory;
pub use super::unit_of_measure_desc::Entity as UnitOfMeasureDesc;
pub use super::user::Entity as User;
pub use super::without::Entity as Without;

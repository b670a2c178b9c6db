use crate::server::data::payment::PaymentRepository;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod disable;
mod get_by_order;

const MERCHANT: i32 = 1;

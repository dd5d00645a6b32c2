pub mod recharge;

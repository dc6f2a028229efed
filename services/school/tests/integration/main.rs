mod helpers;
mod meal_test;
mod router_test;

//! Sample API payloads for tests.
//!
//! Enabled with the `fixtures` feature. Each function returns a JSON value
//! that deserializes cleanly into its matching type.

use serde_json::{json, Value};

/// A waypoint with only the required fields.
pub fn waypoint_json(name: &str) -> Value {
    json!({
        "name": name,
        "phone_number": "+15555550100",
        "address": "1 Market St, San Francisco, CA, 94105",
        "location": {"lat": 37.7936, "lng": -122.3950},
        "status": "completed",
        "status_timestamp": "2024-05-01T17:30:00Z"
    })
}

/// A delivery in the given status.
pub fn delivery_json(id: &str, status: &str) -> Value {
    json!({
        "complete": false,
        "courier": {
            "name": "Sam R.",
            "vehicle_type": "bicycle",
            "phone_number": "+15555550199",
            "location": {"lat": 37.7901, "lng": -122.4010}
        },
        "courier_imminent": false,
        "created": "2024-05-01T17:00:00Z",
        "currency": "usd",
        "dropoff": waypoint_json("Customer"),
        "dropoff_deadline": "2024-05-01T18:30:00Z",
        "dropoff_eta": "2024-05-01T18:00:00Z",
        "dropoff_ready": "2024-05-01T17:10:00Z",
        "external_id": "acct_ext_1",
        "fee": 799,
        "id": id,
        "kind": "delivery",
        "live_mode": false,
        "manifest": {"reference": "order-42", "total_value": 2500},
        "manifest_items": [{"name": "Burrito", "quantity": 2, "size": "small"}],
        "pickup": waypoint_json("Store"),
        "pickup_deadline": "2024-05-01T17:45:00Z",
        "pickup_eta": "2024-05-01T17:20:00Z",
        "pickup_ready": "2024-05-01T17:05:00Z",
        "quote_id": "dqt_1",
        "status": status,
        "tracking_url": "https://delivery.uber.com/orders/del_1",
        "undeliverable_action": "",
        "undeliverable_reason": "",
        "updated": "2024-05-01T17:15:00Z",
        "uuid": "0f6f3b2e9c8d4a7b8e1f2a3b4c5d6e7f"
    })
}

/// A delivery quote.
pub fn quote_json() -> Value {
    json!({
        "created": "2024-05-01T17:00:00Z",
        "currency_type": "USD",
        "dropoff_deadline": "2024-05-01T18:30:00Z",
        "dropoff_eta": "2024-05-01T18:00:00Z",
        "duration": 35,
        "expires": "2024-05-01T17:15:00Z",
        "fee": 799,
        "id": "dqt_1",
        "kind": "delivery_quote",
        "pickup_duration": 12
    })
}

/// A page of deliveries.
pub fn delivery_list_json() -> Value {
    json!({
        "data": [delivery_json("del_1", "pending"), delivery_json("del_2", "delivered")],
        "next_href": "",
        "object": "list",
        "total_count": -1,
        "url": "/v1/customers/cus_1/deliveries"
    })
}

/// A refund request.
pub fn refund_json() -> Value {
    json!({
        "id": "ref_1",
        "created_at": 1714582800,
        "currency_code": "USD",
        "total_partner_refund": 1234,
        "total_uber_refund": 1834,
        "refund_fees": [
            {"fee_code": "UBER_DELIVERY_FEE", "value": 799, "category": "DELIVERY"}
        ],
        "refund_order_items": [{
            "refund_items": [{"name": "Burrito", "quantity": 1}],
            "party_at_fault": "UBER",
            "partner_refund_amount": 0,
            "uber_refund_amount": 1035,
            "reason": "ITEM_MISSING"
        }]
    })
}

/// An `event.delivery_status` payload with the given kind string.
pub fn delivery_status_event_json(kind: &str) -> Value {
    json!({
        "status": "pickup",
        "kind": kind,
        "created": "2024-05-01T17:16:00Z",
        "live_mode": false,
        "delivery_id": "del_1",
        "id": "evt_1",
        "data": delivery_json("del_1", "pickup"),
        "customer_id": "cus_1",
        "developer_id": "dev_1",
        "account_id": "acc_1",
        "batch_id": "bat_1",
        "route_id": "rte_1"
    })
}

/// An `event.courier_update` payload.
pub fn courier_update_event_json() -> Value {
    json!({
        "location": {"lat": 37.7911, "lng": -122.3990},
        "kind": "event.courier_update",
        "live_mode": false,
        "delivery_id": "del_1",
        "data": delivery_json("del_1", "dropoff")
    })
}

/// A refund request payload with the given kind string.
pub fn refund_request_event_json(kind: &str) -> Value {
    json!({
        "kind": kind,
        "created": 1714582900,
        "delivery_id": "del_1",
        "id": "evt_2",
        "data": refund_json(),
        "external_order_id": "order-42"
    })
}

/// Organization info block.
pub fn organization_info_json() -> Value {
    json!({
        "name": "Acme Deli",
        "merchant_type": "MERCHANT_TYPE_RESTAURANT",
        "point_of_contact": {
            "email": "ops@acme.test",
            "phone_details": {"country_code": "1", "subscriber_number": "5555550100"}
        },
        "billing_type": "BILLING_TYPE_CENTRALIZED",
        "address": {"street1": "1 Market St", "city": "San Francisco", "country_iso2": "US"}
    })
}

/// Organization details.
pub fn organization_json(org_id: &str) -> Value {
    json!({
        "organization_id": org_id,
        "info": organization_info_json(),
        "hierarchy_info": {"parent_organization_id": "org_parent"}
    })
}

/// Membership invite response.
pub fn invite_json(org_id: &str) -> Value {
    json!({
        "membership_id": "mem_1",
        "organization_id": org_id,
        "user_details": {"email": "new@acme.test", "first_name": "Ada", "last_name": "L"},
        "roles": ["ROLE_EMPLOYEE"]
    })
}

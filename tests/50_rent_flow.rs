mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

/// Create a landlord, an attached property and one available room; returns
/// (landlord, property, room) ids plus the unique suffix used.
async fn setup_room(
    client: &reqwest::Client,
    base_url: &str,
) -> Result<(String, String, String, String)> {
    let suffix = uuid::Uuid::new_v4().simple().to_string();

    let res = client
        .post(format!("{}/landlord/create", base_url))
        .json(&json!({
            "name": "Flow",
            "email": format!("flow-{}@example.com", suffix),
            "phoneNumber": format!("070-{}", suffix),
            "password": "secret",
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let landlord_id = res.json::<Value>().await?["landlord"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let res = client
        .post(format!("{}/property/create", base_url))
        .json(&json!({
            "name": "Flow Court",
            "address": "5 Flow Rd",
            "description": "Test property",
            "landlordId": landlord_id,
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let property_id = res.json::<Value>().await?["id"].as_str().unwrap().to_string();

    let res = client
        .post(format!("{}/room/create", base_url))
        .json(&json!({
            "name": "R1",
            "type": "single",
            "rentingPrice": 500,
            "property": property_id,
            "landlord": landlord_id,
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let room_id = res.json::<Value>().await?["id"].as_str().unwrap().to_string();

    Ok((landlord_id, property_id, room_id, suffix))
}

#[tokio::test]
async fn rent_and_vacate_cycle() -> Result<()> {
    let server = common::ensure_server().await?;
    if !common::db_available(server).await {
        eprintln!("skipping rent_and_vacate_cycle: database unavailable");
        return Ok(());
    }
    let client = reqwest::Client::new();
    let (_, property_id, room_id, suffix) = setup_room(&client, &server.base_url).await?;

    let phone = format!("0555-{}", suffix);
    let res = client
        .post(format!("{}/tenant/create-with-no-room", server.base_url))
        .json(&json!({
            "name": "Renter",
            "email": format!("renter-{}@example.com", suffix),
            "phoneNumber": phone,
            "password": "secret",
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let tenant_id = res.json::<Value>().await?["tenant"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    // rent: both sides of the link are written
    let res = client
        .post(format!("{}/room/rent/{}", server.base_url, room_id))
        .json(&json!({ "tenantPhone": phone }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let rented = res.json::<Value>().await?;
    assert_eq!(rented["status"], "rented");
    assert_eq!(rented["tenant"], tenant_id.as_str());

    let res = client
        .get(format!("{}/tenant/get-one/{}", server.base_url, tenant_id))
        .send()
        .await?;
    let tenant = res.json::<Value>().await?;
    assert_eq!(tenant["roomRented"]["id"], room_id.as_str());
    assert_eq!(tenant["propertyRented"]["id"], property_id.as_str());

    // renting the same room again conflicts
    let res = client
        .post(format!("{}/room/rent/{}", server.base_url, room_id))
        .json(&json!({ "tenantPhone": phone }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "Room is already rented");

    // a rented room cannot be deleted
    let res = client
        .delete(format!("{}/room/delete/{}", server.base_url, room_id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "Cannot delete a rented room");

    // vacate: both sides cleared symmetrically
    let res = client
        .put(format!("{}/room/make-available/{}", server.base_url, room_id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let vacated = res.json::<Value>().await?;
    assert_eq!(vacated["status"], "available");
    assert!(vacated["tenant"].is_null());

    let res = client
        .get(format!("{}/tenant/get-one/{}", server.base_url, tenant_id))
        .send()
        .await?;
    let tenant = res.json::<Value>().await?;
    assert!(tenant["roomRented"].is_null());
    assert!(tenant["propertyRented"].is_null());

    // vacating an already-available room conflicts
    let res = client
        .put(format!("{}/room/make-available/{}", server.base_url, room_id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "Room is already available");

    // an available room deletes cleanly and leaves the property's list
    let res = client
        .delete(format!("{}/room/delete/{}", server.base_url, room_id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(format!("{}/property/get-one/{}", server.base_url, property_id))
        .send()
        .await?;
    let property = res.json::<Value>().await?;
    assert!(property["rooms"].as_array().unwrap().is_empty());

    Ok(())
}

#[tokio::test]
async fn renting_to_an_already_housed_tenant_conflicts() -> Result<()> {
    let server = common::ensure_server().await?;
    if !common::db_available(server).await {
        eprintln!("skipping renting_to_an_already_housed_tenant_conflicts: database unavailable");
        return Ok(());
    }
    let client = reqwest::Client::new();
    let (landlord_id, property_id, room_id, suffix) = setup_room(&client, &server.base_url).await?;

    // a second room in the same property
    let res = client
        .post(format!("{}/room/create", server.base_url))
        .json(&json!({
            "name": "R2",
            "type": "oneBedroom",
            "rentingPrice": 700,
            "property": property_id,
            "landlord": landlord_id,
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let second_room_id = res.json::<Value>().await?["id"].as_str().unwrap().to_string();

    let phone = format!("0556-{}", suffix);
    let res = client
        .post(format!("{}/tenant/create-with-no-room", server.base_url))
        .json(&json!({
            "name": "Housed",
            "email": format!("housed-{}@example.com", suffix),
            "phoneNumber": phone,
            "password": "secret",
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .post(format!("{}/room/rent/{}", server.base_url, room_id))
        .json(&json!({ "tenantPhone": phone }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    // one room per tenant
    let res = client
        .post(format!("{}/room/rent/{}", server.base_url, second_room_id))
        .json(&json!({ "tenantPhone": phone }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "Tenant has already rented a room");

    Ok(())
}

#[tokio::test]
async fn tenant_created_with_room_marks_it_rented() -> Result<()> {
    let server = common::ensure_server().await?;
    if !common::db_available(server).await {
        eprintln!("skipping tenant_created_with_room_marks_it_rented: database unavailable");
        return Ok(());
    }
    let client = reqwest::Client::new();
    let (_, property_id, room_id, suffix) = setup_room(&client, &server.base_url).await?;

    let res = client
        .post(format!("{}/tenant/create", server.base_url))
        .json(&json!({
            "name": "Bound",
            "email": format!("bound-{}@example.com", suffix),
            "phoneNumber": format!("0557-{}", suffix),
            "password": "secret",
            "roomRented": room_id,
            "propertyRented": property_id,
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let tenant = res.json::<Value>().await?;
    let tenant_id = tenant["tenant"]["id"].as_str().unwrap().to_string();

    let res = client
        .get(format!("{}/room/get-one/{}", server.base_url, room_id))
        .send()
        .await?;
    let room = res.json::<Value>().await?;
    assert_eq!(room["status"], "rented");
    assert_eq!(room["tenant"]["id"], tenant_id.as_str());

    // the room is no longer available for a second binding
    let res = client
        .post(format!("{}/tenant/create", server.base_url))
        .json(&json!({
            "name": "TooLate",
            "email": format!("late-{}@example.com", suffix),
            "phoneNumber": format!("0558-{}", suffix),
            "password": "secret",
            "roomRented": room_id,
            "propertyRented": property_id,
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "Room is not available for rent");

    // deleting the tenant frees the room again
    let res = client
        .delete(format!("{}/tenant/delete/{}", server.base_url, tenant_id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(format!("{}/room/get-one/{}", server.base_url, room_id))
        .send()
        .await?;
    let room = res.json::<Value>().await?;
    assert_eq!(room["status"], "available");
    assert!(room["tenant"].is_null());

    Ok(())
}

#[tokio::test]
async fn room_must_belong_to_the_given_property() -> Result<()> {
    let server = common::ensure_server().await?;
    if !common::db_available(server).await {
        eprintln!("skipping room_must_belong_to_the_given_property: database unavailable");
        return Ok(());
    }
    let client = reqwest::Client::new();
    let (landlord_id, _, room_id, suffix) = setup_room(&client, &server.base_url).await?;

    // an unrelated property owned by the same landlord
    let res = client
        .post(format!("{}/property/create", server.base_url))
        .json(&json!({
            "name": "Other Court",
            "address": "6 Other Rd",
            "description": "Different property",
            "landlordId": landlord_id,
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let other_property_id = res.json::<Value>().await?["id"].as_str().unwrap().to_string();

    let res = client
        .post(format!("{}/tenant/create", server.base_url))
        .json(&json!({
            "name": "Mismatched",
            "email": format!("mismatch-{}@example.com", suffix),
            "phoneNumber": format!("0559-{}", suffix),
            "password": "secret",
            "roomRented": room_id,
            "propertyRented": other_property_id,
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "Room does not belong to the specified property");

    Ok(())
}

//! The poster draw sequence. One call renders the whole 1080x1080 design onto
//! the supplied 2D context; output depends only on the attendee info, the
//! loaded assets and the constants in `layout`.

use std::f64::consts::PI;

use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::assets::AssetSet;
use crate::error::{PosterError, Result};
use crate::layout::*;
use crate::types::AttendeeInfo;

fn js(e: wasm_bindgen::JsValue) -> PosterError {
    PosterError::canvas(e)
}

pub fn draw_poster(
    ctx: &CanvasRenderingContext2d,
    info: &AttendeeInfo,
    photo: &HtmlImageElement,
    assets: &AssetSet,
) -> Result<()> {
    ctx.save();
    let result = draw_layers(ctx, info, photo, assets);
    ctx.restore();
    result
}

fn draw_layers(
    ctx: &CanvasRenderingContext2d,
    info: &AttendeeInfo,
    photo: &HtmlImageElement,
    assets: &AssetSet,
) -> Result<()> {
    draw_background(ctx)?;
    draw_badge(ctx, assets)?;
    draw_photo(ctx, photo)?;
    draw_attendee_details(ctx, info);
    draw_attending_section(ctx)?;
    draw_event_details(ctx)?;
    draw_footer(ctx, assets)?;
    Ok(())
}

fn draw_background(ctx: &CanvasRenderingContext2d) -> Result<()> {
    let gradient = ctx.create_linear_gradient(0.0, 0.0, POSTER_SIZE, POSTER_SIZE);
    for stop in BACKGROUND_STOPS {
        let _ = gradient.add_color_stop(stop.offset as f32, stop.color);
    }
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(0.0, 0.0, POSTER_SIZE, POSTER_SIZE);

    ctx.set_global_alpha(CORNER_CIRCLE_ALPHA);
    for circle in CORNER_CIRCLES {
        fill_circle(ctx, circle.x, circle.y, circle.radius, circle.color)?;
    }
    ctx.set_global_alpha(1.0);

    for dot in ACCENT_DOTS {
        fill_circle(ctx, dot.x, dot.y, dot.radius, dot.color)?;
    }
    Ok(())
}

fn draw_badge(ctx: &CanvasRenderingContext2d, assets: &AssetSet) -> Result<()> {
    ctx.set_fill_style_str("#ffffff");
    rounded_rect_path(ctx, BADGE_X, BADGE_Y, BADGE_WIDTH, BADGE_HEIGHT, BADGE_RADIUS)?;
    ctx.fill();
    ctx.set_shadow_color("rgba(0,0,0,0.25)");
    ctx.set_shadow_blur(20.0);
    ctx.fill();
    ctx.set_shadow_blur(0.0);
    ctx.set_shadow_color("transparent");

    if let Some(logo) = assets.get("badge_logo") {
        ctx.draw_image_with_html_image_element_and_dw_and_dh(
            logo,
            BADGE_X + BADGE_LOGO_INSET,
            BADGE_Y + BADGE_LOGO_INSET,
            BADGE_LOGO_SIZE,
            BADGE_LOGO_SIZE,
        )
        .map_err(js)?;
    }

    ctx.set_text_align("left");
    ctx.set_fill_style_str("#127173");
    ctx.set_font("bold 18px Montserrat, Arial");
    let _ = ctx.fill_text(BADGE_LINE1, BADGE_X + 95.0, BADGE_Y + 42.0);
    ctx.set_fill_style_str("#4b0082");
    ctx.set_font("bold 28px Montserrat, Arial");
    let _ = ctx.fill_text(BADGE_LINE2, BADGE_X + 95.0, BADGE_Y + 72.0);
    Ok(())
}

fn draw_photo(ctx: &CanvasRenderingContext2d, photo: &HtmlImageElement) -> Result<()> {
    let cx = PHOTO_CENTER_X;
    let cy = PHOTO_CENTER_Y;
    let outer = PHOTO_RADIUS + PHOTO_OUTER_RING_OFFSET;

    // Outer ring, gradient sweep across the ring's extent.
    let gradient = ctx.create_linear_gradient(cx - outer, cy - outer, cx + outer, cy + outer);
    for stop in OUTER_RING_STOPS {
        let _ = gradient.add_color_stop(stop.offset as f32, stop.color);
    }
    ctx.begin_path();
    ctx.arc(cx, cy, outer, 0.0, PI * 2.0).map_err(js)?;
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill();

    // Pink accent ring.
    ctx.begin_path();
    ctx.arc(cx, cy, PHOTO_RADIUS + PHOTO_ACCENT_RING_OFFSET, 0.0, PI * 2.0)
        .map_err(js)?;
    ctx.set_stroke_style_str("#ff1493");
    ctx.set_line_width(6.0);
    ctx.set_global_alpha(0.7);
    ctx.stroke();
    ctx.set_global_alpha(1.0);

    // White border.
    ctx.begin_path();
    ctx.arc(cx, cy, PHOTO_RADIUS, 0.0, PI * 2.0).map_err(js)?;
    ctx.set_stroke_style_str("rgba(255, 255, 255, 0.95)");
    ctx.set_line_width(PHOTO_BORDER_WIDTH);
    ctx.stroke();

    // Photo, cover-cropped inside a circular clip.
    ctx.save();
    ctx.begin_path();
    ctx.arc(cx, cy, PHOTO_CLIP_RADIUS, 0.0, PI * 2.0).map_err(js)?;
    ctx.clip();
    let (w, h, dx, dy) = cover_fit(
        photo.natural_width() as f64,
        photo.natural_height() as f64,
        PHOTO_CLIP_RADIUS * 2.0,
    );
    let drawn = ctx.draw_image_with_html_image_element_and_dw_and_dh(photo, cx + dx, cy + dy, w, h);
    ctx.restore();
    drawn.map_err(js)?;

    draw_ribbon(ctx, cx, cy + PHOTO_RADIUS + RIBBON_GAP + RIBBON_HEIGHT / 2.0)
}

fn draw_ribbon(ctx: &CanvasRenderingContext2d, cx: f64, cy: f64) -> Result<()> {
    ctx.save();
    ctx.translate(cx, cy).map_err(js)?;

    let gradient = ctx.create_linear_gradient(-RIBBON_WIDTH / 2.0, 0.0, RIBBON_WIDTH / 2.0, 0.0);
    let _ = gradient.add_color_stop(0.0, "#0033cc");
    let _ = gradient.add_color_stop(1.0, "#4b0082");
    ctx.set_fill_style_canvas_gradient(&gradient);
    rounded_rect_path(
        ctx,
        -RIBBON_WIDTH / 2.0,
        -RIBBON_HEIGHT / 2.0,
        RIBBON_WIDTH,
        RIBBON_HEIGHT,
        RIBBON_RADIUS,
    )?;
    ctx.fill();
    ctx.set_stroke_style_str("rgba(255,255,255,0.3)");
    ctx.set_line_width(2.0);
    ctx.stroke();

    ctx.set_fill_style_str("#ffffff");
    ctx.set_font("bold 16px Montserrat, Arial");
    ctx.set_text_align("center");
    let _ = ctx.fill_text(RIBBON_LABEL, 0.0, 6.0);
    ctx.restore();
    Ok(())
}

fn draw_attendee_details(ctx: &CanvasRenderingContext2d, info: &AttendeeInfo) {
    ctx.set_text_align("left");

    ctx.set_fill_style_str("#ffffff");
    ctx.set_font("bold 48px Montserrat, Arial");
    let _ = ctx.fill_text(display_name(&info.name), DETAILS_X, DETAILS_Y);

    ctx.set_font("600 28px Poppins, Arial");
    ctx.set_fill_style_str("rgba(255, 255, 255, 0.9)");
    let _ = ctx.fill_text(
        display_designation(&info.designation),
        DETAILS_X,
        DETAILS_Y + DESIGNATION_OFFSET,
    );

    if let Some(company) = info.company.as_deref().filter(|c| !c.trim().is_empty()) {
        ctx.set_font("24px Poppins, Arial");
        ctx.set_fill_style_str("rgba(255, 255, 255, 0.7)");
        let _ = ctx.fill_text(company, DETAILS_X, DETAILS_Y + COMPANY_OFFSET);
    }
}

fn draw_attending_section(ctx: &CanvasRenderingContext2d) -> Result<()> {
    ctx.set_fill_style_str("rgba(255, 255, 255, 0.08)");
    rounded_rect_path(
        ctx,
        ATTENDING_PANEL_X,
        ATTENDING_Y - 30.0,
        ATTENDING_PANEL_WIDTH,
        ATTENDING_PANEL_HEIGHT,
        ATTENDING_PANEL_RADIUS,
    )?;
    ctx.fill();
    ctx.set_stroke_style_str("rgba(255, 255, 255, 0.1)");
    ctx.set_line_width(2.0);
    ctx.stroke();

    ctx.set_text_align("center");
    ctx.set_font("italic 44px \"Dancing Script\", cursive, Arial");
    ctx.set_fill_style_str("rgba(255, 255, 255, 0.95)");
    let _ = ctx.fill_text(ATTENDING_LINE, ATTENDING_CENTER_X, ATTENDING_Y + 20.0);

    ctx.set_font("bold 44px Montserrat, Arial");
    ctx.set_fill_style_str("#ffffff");
    let _ = ctx.fill_text(EVENT_NAME, ATTENDING_CENTER_X, ATTENDING_Y + 75.0);

    ctx.set_fill_style_str("#00d4ff");
    let _ = ctx.fill_text(EVENT_EDITION, ATTENDING_CENTER_X, ATTENDING_Y + 130.0);
    Ok(())
}

fn draw_event_details(ctx: &CanvasRenderingContext2d) -> Result<()> {
    let y = EVENT_DETAILS_Y;
    ctx.set_text_align("left");

    // Date.
    icon_tile(ctx, DATE_TILE_X, y)?;
    ctx.set_fill_style_str("#00d4ff");
    ctx.set_font("32px Arial");
    let _ = ctx.fill_text(DATE_ICON, DATE_TILE_X + 10.0, y + 18.0);
    ctx.set_fill_style_str("rgba(255, 255, 255, 0.6)");
    ctx.set_font("18px Poppins, Arial");
    let _ = ctx.fill_text(EVENT_DAY, DATE_TEXT_X, y);
    ctx.set_fill_style_str("#ffffff");
    ctx.set_font("bold 22px Poppins, Arial");
    let _ = ctx.fill_text(EVENT_DATE, DATE_TEXT_X, y + 28.0);

    // Venue.
    icon_tile(ctx, VENUE_TILE_X, y)?;
    ctx.set_fill_style_str("#ff1493");
    ctx.set_font("32px Arial");
    let _ = ctx.fill_text(VENUE_ICON, VENUE_TILE_X + 10.0, y + 18.0);
    ctx.set_fill_style_str("#ffffff");
    ctx.set_font("20px Poppins, Arial");
    let _ = ctx.fill_text(EVENT_VENUE_LINE1, VENUE_TEXT_X, y);
    let _ = ctx.fill_text(EVENT_VENUE_LINE2, VENUE_TEXT_X, y + 28.0);
    Ok(())
}

fn icon_tile(ctx: &CanvasRenderingContext2d, x: f64, y: f64) -> Result<()> {
    ctx.set_fill_style_str("rgba(255, 255, 255, 0.1)");
    rounded_rect_path(ctx, x, y - 25.0, EVENT_TILE_SIZE, EVENT_TILE_SIZE, EVENT_TILE_RADIUS)?;
    ctx.fill();
    Ok(())
}

fn draw_footer(ctx: &CanvasRenderingContext2d, assets: &AssetSet) -> Result<()> {
    let y = FOOTER_Y;
    ctx.set_fill_style_str("#ffffff");
    ctx.fill_rect(0.0, y, POSTER_SIZE, FOOTER_HEIGHT);

    for slot in FOOTER_LOGOS {
        if let Some(img) = assets.get(slot.key) {
            ctx.draw_image_with_html_image_element_and_dw_and_dh(
                img,
                slot.x,
                y + (FOOTER_HEIGHT - slot.height) / 2.0,
                slot.width,
                slot.height,
            )
            .map_err(js)?;
        }
    }

    ctx.set_fill_style_str("#e0e0e0");
    ctx.fill_rect(FOOTER_DIVIDER_X, y + 30.0, 2.0, FOOTER_HEIGHT - 60.0);

    // Square so the community mark keeps its aspect ratio.
    if let Some(img) = assets.get("community_logo") {
        ctx.draw_image_with_html_image_element_and_dw_and_dh(
            img,
            COMMUNITY_LOGO_X,
            y + (FOOTER_HEIGHT - COMMUNITY_LOGO_SIZE) / 2.0,
            COMMUNITY_LOGO_SIZE,
            COMMUNITY_LOGO_SIZE,
        )
        .map_err(js)?;
    }

    ctx.set_fill_style_str("#333333");
    ctx.set_font("bold 20px Montserrat, Arial");
    ctx.set_text_align("left");
    let _ = ctx.fill_text(COMMUNITY_LINE1, COMMUNITY_TEXT_X, y + 50.0);
    let _ = ctx.fill_text(COMMUNITY_LINE2, COMMUNITY_TEXT_X, y + 76.0);

    ctx.set_fill_style_str("#666666");
    ctx.set_font("14px Poppins, Arial");
    let _ = ctx.fill_text(COMMUNITY_TAGLINE, COMMUNITY_TEXT_X + 15.0, y + 110.0);
    Ok(())
}

fn fill_circle(ctx: &CanvasRenderingContext2d, x: f64, y: f64, radius: f64, color: &str) -> Result<()> {
    ctx.begin_path();
    ctx.arc(x, y, radius, 0.0, PI * 2.0).map_err(js)?;
    ctx.set_fill_style_str(color);
    ctx.fill();
    Ok(())
}

fn rounded_rect_path(ctx: &CanvasRenderingContext2d, x: f64, y: f64, w: f64, h: f64, r: f64) -> Result<()> {
    let r = r.min(w / 2.0).min(h / 2.0);
    ctx.begin_path();
    ctx.move_to(x + r, y);
    ctx.line_to(x + w - r, y);
    ctx.arc_to(x + w, y, x + w, y + r, r).map_err(js)?;
    ctx.line_to(x + w, y + h - r);
    ctx.arc_to(x + w, y + h, x + w - r, y + h, r).map_err(js)?;
    ctx.line_to(x + r, y + h);
    ctx.arc_to(x, y + h, x, y + h - r, r).map_err(js)?;
    ctx.line_to(x, y + r);
    ctx.arc_to(x, y, x + r, y, r).map_err(js)?;
    ctx.close_path();
    Ok(())
}

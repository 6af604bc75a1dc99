//! Squash Ball entry point
//!
//! On wasm32 this builds a full-window canvas, wires pointer/resize listeners
//! into the app's event queue and drives frames with requestAnimationFrame.
//! Natively it runs a short headless drop and logs what happens.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{AddEventListenerOptions, HtmlCanvasElement, MouseEvent, TouchEvent, Window};

    use squash_ball::App;
    use squash_ball::renderer::CanvasSurface;
    use squash_ball::sim::HostEvent;

    /// Everything the frame callback needs
    struct Host {
        app: App,
        surface: CanvasSurface,
    }

    type Shared = Rc<RefCell<Host>>;

    fn window() -> Result<Window, JsValue> {
        web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
    }

    fn inner_size(window: &Window) -> Result<(f64, f64), JsValue> {
        let width = window.inner_width()?.as_f64().unwrap_or(0.0);
        let height = window.inner_height()?.as_f64().unwrap_or(0.0);
        Ok((width, height))
    }

    /// Client coordinates to canvas coordinates
    fn canvas_point(canvas: &HtmlCanvasElement, client_x: i32, client_y: i32) -> Vec2 {
        let rect = canvas.get_bounding_client_rect();
        Vec2::new(
            (client_x as f64 - rect.left()) as f32,
            (client_y as f64 - rect.top()) as f32,
        )
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Squash Ball starting...");

        let window = window()?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        let (width, height) = inner_size(&window)?;
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
        document
            .body()
            .ok_or_else(|| JsValue::from_str("no body"))?
            .append_child(&canvas)?;

        let surface = CanvasSurface::new(&canvas)?;
        let host = Rc::new(RefCell::new(Host {
            app: App::new(width as f32, height as f32),
            surface,
        }));
        log::info!("Canvas {}x{}", width, height);

        setup_pointer_handlers(&canvas, host.clone())?;
        setup_touch_handlers(&canvas, host.clone())?;
        setup_resize_handler(&canvas, host.clone())?;

        request_animation_frame(host);

        log::info!("Squash Ball running!");
        Ok(())
    }

    fn setup_pointer_handlers(canvas: &HtmlCanvasElement, host: Shared) -> Result<(), JsValue> {
        let document = window()?
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        // Press only counts on the canvas
        {
            let host = host.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let p = canvas_point(&canvas_clone, event.client_x(), event.client_y());
                host.borrow_mut().app.push_event(HostEvent::PointerDown(p));
            });
            canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Move and release are global so a drag can leave the canvas
        {
            let host = host.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let p = canvas_point(&canvas_clone, event.client_x(), event.client_y());
                host.borrow_mut().app.push_event(HostEvent::PointerMove(p));
            });
            document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                host.borrow_mut().app.push_event(HostEvent::PointerUp);
            });
            document.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_touch_handlers(canvas: &HtmlCanvasElement, host: Shared) -> Result<(), JsValue> {
        let document = window()?
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        {
            let host = host.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let p = canvas_point(&canvas_clone, touch.client_x(), touch.client_y());
                    host.borrow_mut().app.push_event(HostEvent::PointerDown(p));
                }
            });
            canvas.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        {
            let host = host.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let p = canvas_point(&canvas_clone, touch.client_x(), touch.client_y());
                    host.borrow_mut().app.push_event(HostEvent::PointerMove(p));
                }
            });
            // Document-level touch listeners default to passive, which ignores prevent_default
            let options = AddEventListenerOptions::new();
            options.set_passive(false);
            document.add_event_listener_with_callback_and_add_event_listener_options(
                "touchmove",
                closure.as_ref().unchecked_ref(),
                &options,
            )?;
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                host.borrow_mut().app.push_event(HostEvent::PointerUp);
            });
            document.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_resize_handler(canvas: &HtmlCanvasElement, host: Shared) -> Result<(), JsValue> {
        let window = window()?;
        let canvas_clone = canvas.clone();
        let window_clone = window.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            match inner_size(&window_clone) {
                Ok((width, height)) => {
                    canvas_clone.set_width(width as u32);
                    canvas_clone.set_height(height as u32);
                    host.borrow_mut().app.push_event(HostEvent::Resize {
                        width: width as f32,
                        height: height as f32,
                    });
                }
                Err(e) => log::warn!("Resize ignored: {:?}", e),
            }
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(host: Shared) {
        let Ok(window) = window() else {
            log::error!("No window, frame loop stopped");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            frame_loop(host);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn frame_loop(host: Shared) {
        {
            let mut h = host.borrow_mut();
            let Host { app, surface } = &mut *h;
            app.frame(surface);
        }

        request_animation_frame(host);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_app::run() {
        log::error!("Startup failed: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Squash Ball (native) starting...");
    log::info!("Native mode is headless - build for wasm32 for the interactive canvas");

    headless_drop();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drop the ball from the center of an 800x600 viewport and report each bounce
#[cfg(not(target_arch = "wasm32"))]
fn headless_drop() {
    use squash_ball::App;
    use squash_ball::renderer::CommandRecorder;

    const FRAMES: u64 = 600;

    let mut app = App::new(800.0, 600.0);
    let mut surface = CommandRecorder::new();
    let mut bounces = 0;

    for _ in 0..FRAMES {
        app.frame(&mut surface);
        surface.take();

        let ball = &app.state().ball;
        if ball.bounce_started() {
            bounces += 1;
            log::info!(
                "Bounce {} at frame {}: pos {} vel {}",
                bounces,
                app.frames(),
                ball.pos,
                ball.vel
            );
        }
    }

    let ball = &app.state().ball;
    log::info!(
        "After {} frames: {} bounces, resting at y = {:.2}",
        app.frames(),
        bounces,
        ball.pos.y
    );
}

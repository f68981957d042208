use assets::{TextureLoadError, TextureSet};
use gpu::Renderer;
use runtime::{EventBus, EventKind, Frame};
use scene::prefabs::build_globe;
use scene::scroll::apply_progress;
use tracing::{debug, error, info, warn};

use crate::config::HeroConfig;
use crate::error::HeroError;
use crate::host::{HeroHost, RenderBackend, Signal, SurfaceSize, Ticket};
use crate::session::Session;
use crate::status::{HeroStatus, LoadState};

/// `NotMounted → Mounting → Mounted → Unmounted`. `Unmounted` is final; a new
/// mount needs a new controller.
#[derive(Debug)]
pub enum MountPhase<B> {
    NotMounted,
    /// Backend creation is in flight.
    Mounting { ticket: Ticket, size: SurfaceSize },
    Mounted(Box<Session<B>>),
    Unmounted,
}

impl<B> MountPhase<B> {
    pub fn as_str(&self) -> &'static str {
        match self {
            MountPhase::NotMounted => "not_mounted",
            MountPhase::Mounting { .. } => "mounting",
            MountPhase::Mounted(_) => "mounted",
            MountPhase::Unmounted => "unmounted",
        }
    }
}

/// Owns one hero-globe session and drives it from host callbacks.
pub struct MountController<H: HeroHost> {
    host: H,
    config: HeroConfig,
    phase: MountPhase<H::Backend>,
    status: HeroStatus,
    next_ticket: u64,
    frame: Frame,
    events: EventBus,
}

impl<H: HeroHost> MountController<H> {
    pub fn new(host: H, config: HeroConfig) -> Self {
        Self {
            host,
            config,
            phase: MountPhase::NotMounted,
            status: HeroStatus::Placeholder,
            next_ticket: 0,
            frame: Frame::default(),
            events: EventBus::new(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn config(&self) -> &HeroConfig {
        &self.config
    }

    pub fn phase(&self) -> &MountPhase<H::Backend> {
        &self.phase
    }

    pub fn status(&self) -> &HeroStatus {
        &self.status
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn session(&self) -> Option<&Session<H::Backend>> {
        match &self.phase {
            MountPhase::Mounted(session) => Some(session),
            _ => None,
        }
    }

    pub fn scroll_progress(&self) -> f64 {
        self.session().map_or(0.0, |s| s.progress)
    }

    /// Start a session if the host has a surface. Returns `false` (and does
    /// nothing) when there is no surface or the controller was already used.
    pub fn attach(&mut self) -> bool {
        if !matches!(self.phase, MountPhase::NotMounted) {
            debug!(phase = self.phase.as_str(), "hero attach ignored");
            return false;
        }
        let Some(size) = self.host.surface_size() else {
            debug!("hero attach skipped: no surface");
            return false;
        };
        let size = self.capped(size);

        self.next_ticket += 1;
        let ticket = Ticket(self.next_ticket);
        self.phase = MountPhase::Mounting { ticket, size };
        self.set_status(HeroStatus::Loading);
        self.events.emit(
            self.frame,
            EventKind::Mount,
            format!("mounting {}x{}", size.width, size.height),
        );
        info!(
            ticket = ticket.0,
            width = size.width,
            height = size.height,
            "hero mount started"
        );
        self.host.create_backend(ticket, size, &self.config);
        true
    }

    /// Completion of `HeroHost::create_backend`.
    pub fn backend_ready(&mut self, ticket: Ticket, result: Result<H::Backend, HeroError>) -> bool {
        let size = match self.phase {
            MountPhase::Mounting { ticket: live, size } if live == ticket => size,
            _ => {
                debug!(ticket = ticket.0, "stale backend completion dropped");
                if let Ok(backend) = result {
                    backend.dispose();
                }
                return false;
            }
        };
        let backend = match result {
            Ok(backend) => backend,
            Err(err) => {
                self.fail_init(err);
                return false;
            }
        };

        let mut session = Session::new(ticket, backend, size);
        session.backend.resize(size);
        for signal in [Signal::Resize, Signal::Scroll] {
            match self.host.subscribe(signal) {
                Ok(()) => session.subscriptions.push(signal),
                Err(err) => {
                    self.release(session);
                    self.fail_init(err);
                    return false;
                }
            }
        }
        session.pending_frame = self.host.request_frame();

        self.phase = MountPhase::Mounted(Box::new(session));
        self.events.emit(self.frame, EventKind::Mount, "renderer ready");
        info!(ticket = ticket.0, "hero renderer ready");

        self.host
            .load_textures(ticket, &self.config.textures, self.config.max_texture_dim);
        self.scrolled();
        true
    }

    /// Completion of `HeroHost::load_textures`. Builds the globe on success.
    pub fn textures_loaded(
        &mut self,
        ticket: Ticket,
        result: Result<TextureSet, TextureLoadError>,
    ) -> bool {
        let MountPhase::Mounted(session) = &mut self.phase else {
            debug!(ticket = ticket.0, "texture completion without live session dropped");
            return false;
        };
        if session.ticket != ticket || session.load_state.is_settled() {
            debug!(ticket = ticket.0, "stale texture completion dropped");
            return false;
        }

        let installed = result
            .map_err(HeroError::from)
            .and_then(|set| session.backend.install_textures(&set).map(|()| set));

        match installed {
            Ok(set) => {
                session.scene.insert_globe(build_globe(&set));
                session.load_state = LoadState::Ready;
                info!(bytes = set.byte_len(), "hero textures ready");
                self.events.emit(self.frame, EventKind::Load, "textures ready");
                self.set_status(HeroStatus::Ready);
                // The page may have scrolled while loading.
                self.scrolled();
            }
            Err(err) => {
                session.load_state = LoadState::Failed(err.to_string());
                warn!(error = %err, "hero texture load failed");
                self.events.emit(self.frame, EventKind::Failure, err.to_string());
                debug!(history = %self.events.dump(), "hero lifecycle before failure");
                self.set_status(HeroStatus::Failed(err.user_message().to_string()));
            }
        }
        true
    }

    /// Display-refresh tick: spin, draw, schedule the next tick.
    pub fn frame(&mut self) -> bool {
        let MountPhase::Mounted(session) = &mut self.phase else {
            return false;
        };
        session.pending_frame = None;
        self.frame = self.frame.next();

        session.scene.rotate_globe(self.config.rotation_step);
        let render = Renderer::collect(&session.scene, &session.camera);
        if let Err(err) = session.backend.draw(&render) {
            warn!(frame = self.frame.index, error = %err, "hero frame draw failed");
        }
        session.pending_frame = self.host.request_frame();
        true
    }

    /// Re-read the surface size. Returns `true` when anything changed.
    pub fn resized(&mut self) -> bool {
        let Some(size) = self.host.surface_size() else {
            return false;
        };
        let size = self.capped(size);

        match &mut self.phase {
            MountPhase::Mounting { size: pending, .. } => {
                let changed = *pending != size;
                *pending = size;
                changed
            }
            MountPhase::Mounted(session) => {
                if session.surface == size {
                    return false;
                }
                session.surface = size;
                session.camera.set_viewport(size.width, size.height);
                session.backend.resize(size);
                self.events.emit(
                    self.frame,
                    EventKind::Resize,
                    format!("{}x{}", size.width, size.height),
                );
                debug!(width = size.width, height = size.height, "hero resized");
                true
            }
            MountPhase::NotMounted | MountPhase::Unmounted => false,
        }
    }

    /// Map the host's current scroll position onto the scene.
    pub fn scrolled(&mut self) -> bool {
        let metrics = self.host.scroll_metrics();
        let MountPhase::Mounted(session) = &mut self.phase else {
            return false;
        };
        let p = metrics.progress();
        session.progress = p;
        apply_progress(p, session.scene.globe_mut(), Some(&mut session.camera));

        let revealed = metrics.overlay_revealed();
        if revealed != session.overlay_revealed {
            session.overlay_revealed = revealed;
            self.host.reveal_overlay(revealed);
        }
        true
    }

    /// Tear the session down. Safe in every phase; after this the controller
    /// ignores all further calls.
    pub fn detach(&mut self) -> bool {
        match std::mem::replace(&mut self.phase, MountPhase::Unmounted) {
            MountPhase::Mounted(session) => {
                let ticket = session.ticket;
                self.release(*session);
                self.events.emit(self.frame, EventKind::Teardown, "session released");
                info!(ticket = ticket.0, "hero unmounted");
                true
            }
            MountPhase::Mounting { ticket, .. } => {
                self.events.emit(self.frame, EventKind::Teardown, "unmounted while mounting");
                info!(ticket = ticket.0, "hero unmounted before renderer was ready");
                true
            }
            MountPhase::NotMounted | MountPhase::Unmounted => false,
        }
    }

    fn capped(&self, size: SurfaceSize) -> SurfaceSize {
        size.with_pixel_ratio(self.config.pixel_ratio(size.pixel_ratio))
    }

    /// Listeners first, then the pending frame, then the backend and its
    /// surface.
    fn release(&mut self, session: Session<H::Backend>) {
        for signal in &session.subscriptions {
            self.host.unsubscribe(*signal);
        }
        if let Some(handle) = session.pending_frame {
            self.host.cancel_frame(handle);
        }
        session.backend.dispose();
    }

    fn fail_init(&mut self, err: HeroError) {
        error!(error = %err, "hero initialization failed");
        self.events.emit(self.frame, EventKind::Failure, err.to_string());
        debug!(history = %self.events.dump(), "hero lifecycle before failure");
        self.phase = MountPhase::Unmounted;
        self.set_status(HeroStatus::Failed(err.user_message().to_string()));
    }

    fn set_status(&mut self, status: HeroStatus) {
        if self.status != status {
            self.host.report(&status);
            self.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use assets::{Texture, TextureLoadError, TextureSet, TextureSlot, TextureSources};
    use gpu::RenderFrame;
    use pretty_assertions::assert_eq;
    use runtime::EventKind;
    use scene::scroll::ScrollMetrics;

    use super::{MountController, MountPhase};
    use crate::config::HeroConfig;
    use crate::error::HeroError;
    use crate::host::{FrameHandle, HeroHost, RenderBackend, Signal, SurfaceSize, Ticket};
    use crate::status::{HeroStatus, LoadState};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        CreateBackend(Ticket, SurfaceSize),
        LoadTextures(Ticket, u32),
        Subscribe(Signal),
        Unsubscribe(Signal),
        RequestFrame(FrameHandle),
        CancelFrame(FrameHandle),
        Report(HeroStatus),
        RevealOverlay(bool),
        Resize(SurfaceSize),
        Install,
        Draw(usize),
        Dispose,
    }

    type Log = Rc<RefCell<Vec<Call>>>;

    #[derive(Debug)]
    struct FakeBackend {
        log: Log,
        fail_install: bool,
    }

    impl RenderBackend for FakeBackend {
        fn resize(&mut self, size: SurfaceSize) {
            self.log.borrow_mut().push(Call::Resize(size));
        }

        fn install_textures(&mut self, _textures: &TextureSet) -> Result<(), HeroError> {
            if self.fail_install {
                return Err(HeroError::Render("texture upload rejected".to_string()));
            }
            self.log.borrow_mut().push(Call::Install);
            Ok(())
        }

        fn draw(&mut self, frame: &RenderFrame) -> Result<(), HeroError> {
            self.log.borrow_mut().push(Call::Draw(frame.commands.len()));
            Ok(())
        }

        fn dispose(self) {
            self.log.borrow_mut().push(Call::Dispose);
        }
    }

    struct FakeHost {
        log: Log,
        surface: Option<SurfaceSize>,
        scroll: ScrollMetrics,
        next_frame: i32,
        refuse: Option<Signal>,
    }

    impl FakeHost {
        fn backend(&self) -> FakeBackend {
            FakeBackend {
                log: self.log.clone(),
                fail_install: false,
            }
        }
    }

    impl HeroHost for FakeHost {
        type Backend = FakeBackend;

        fn surface_size(&self) -> Option<SurfaceSize> {
            self.surface
        }

        fn scroll_metrics(&self) -> ScrollMetrics {
            self.scroll
        }

        fn create_backend(&mut self, ticket: Ticket, size: SurfaceSize, _config: &HeroConfig) {
            self.log.borrow_mut().push(Call::CreateBackend(ticket, size));
        }

        fn load_textures(&mut self, ticket: Ticket, _sources: &TextureSources, max_dim: u32) {
            self.log.borrow_mut().push(Call::LoadTextures(ticket, max_dim));
        }

        fn subscribe(&mut self, signal: Signal) -> Result<(), HeroError> {
            if self.refuse == Some(signal) {
                return Err(HeroError::init("listener rejected"));
            }
            self.log.borrow_mut().push(Call::Subscribe(signal));
            Ok(())
        }

        fn unsubscribe(&mut self, signal: Signal) {
            self.log.borrow_mut().push(Call::Unsubscribe(signal));
        }

        fn request_frame(&mut self) -> Option<FrameHandle> {
            self.next_frame += 1;
            let handle = FrameHandle(self.next_frame);
            self.log.borrow_mut().push(Call::RequestFrame(handle));
            Some(handle)
        }

        fn cancel_frame(&mut self, handle: FrameHandle) {
            self.log.borrow_mut().push(Call::CancelFrame(handle));
        }

        fn report(&mut self, status: &HeroStatus) {
            self.log.borrow_mut().push(Call::Report(status.clone()));
        }

        fn reveal_overlay(&mut self, revealed: bool) {
            self.log.borrow_mut().push(Call::RevealOverlay(revealed));
        }
    }

    const T1: Ticket = Ticket(1);

    fn size() -> SurfaceSize {
        SurfaceSize::new(800, 600)
    }

    fn controller() -> MountController<FakeHost> {
        let host = FakeHost {
            log: Rc::default(),
            surface: Some(size()),
            scroll: ScrollMetrics::new(0.0, 3000.0, 600.0),
            next_frame: 0,
            refuse: None,
        };
        MountController::new(host, HeroConfig::default())
    }

    fn mounted() -> MountController<FakeHost> {
        let mut c = controller();
        assert!(c.attach());
        let backend = c.host().backend();
        assert!(c.backend_ready(T1, Ok(backend)));
        take(&c);
        c
    }

    fn textures() -> TextureSet {
        let t = |name: &str| Texture::solid(name, 4, 2, [90, 120, 200, 255]);
        TextureSet {
            color: t("color"),
            bump: t("bump"),
            specular: t("specular"),
        }
    }

    fn take(c: &MountController<FakeHost>) -> Vec<Call> {
        std::mem::take(&mut *c.host().log.borrow_mut())
    }

    /// Scroll offset that yields progress `p` for the default page.
    fn offset_for(p: f64) -> f64 {
        p * (3000.0 - 600.0) * 0.7
    }

    #[test]
    fn attach_without_surface_is_noop() {
        let mut c = controller();
        c.host_mut().surface = None;

        assert!(!c.attach());
        assert!(take(&c).is_empty());
        assert!(matches!(c.phase(), MountPhase::NotMounted));
        assert_eq!(c.status(), &HeroStatus::Placeholder);
    }

    #[test]
    fn mount_sequence_registers_listeners_then_loads() {
        let mut c = controller();
        assert!(c.attach());
        assert_eq!(
            take(&c),
            vec![
                Call::Report(HeroStatus::Loading),
                Call::CreateBackend(T1, size()),
            ]
        );

        let backend = c.host().backend();
        assert!(c.backend_ready(T1, Ok(backend)));
        assert_eq!(
            take(&c),
            vec![
                Call::Resize(size()),
                Call::Subscribe(Signal::Resize),
                Call::Subscribe(Signal::Scroll),
                Call::RequestFrame(FrameHandle(1)),
                Call::LoadTextures(T1, 2048),
            ]
        );
        assert!(matches!(c.phase(), MountPhase::Mounted(_)));
        assert_eq!(c.events().count(EventKind::Mount), 2);
    }

    #[test]
    fn second_attach_is_ignored() {
        let mut c = mounted();
        assert!(!c.attach());
        assert!(take(&c).is_empty());
    }

    #[test]
    fn frames_draw_before_textures_arrive() {
        let mut c = mounted();
        assert!(c.frame());
        assert_eq!(
            take(&c),
            vec![Call::Draw(0), Call::RequestFrame(FrameHandle(2))]
        );
    }

    #[test]
    fn textures_build_globe_and_spin_it() {
        let mut c = mounted();
        assert!(c.textures_loaded(T1, Ok(textures())));
        assert_eq!(
            take(&c),
            vec![Call::Install, Call::Report(HeroStatus::Ready)]
        );
        assert_eq!(c.status(), &HeroStatus::Ready);

        c.frame();
        c.frame();
        let session = c.session().expect("session");
        assert_eq!(session.load_state, LoadState::Ready);
        let spin = session.scene.globe().map(|g| g.transform.rotation.y);
        assert!(spin.is_some_and(|y| (y - 0.004).abs() < 1e-12));
        assert_eq!(
            take(&c),
            vec![
                Call::Draw(3),
                Call::RequestFrame(FrameHandle(2)),
                Call::Draw(3),
                Call::RequestFrame(FrameHandle(3)),
            ]
        );
    }

    #[test]
    fn texture_failure_reports_and_keeps_rendering() {
        let mut c = mounted();
        let err = TextureLoadError::fetch(TextureSlot::Bump, "/textures/earth_normal_map.jpg", "404");
        assert!(c.textures_loaded(T1, Err(err)));

        assert_eq!(
            c.status(),
            &HeroStatus::Failed("failed to load textures".to_string())
        );
        let session = c.session().expect("session");
        assert!(matches!(session.load_state, LoadState::Failed(_)));
        assert!(!session.scene.has_globe());
        let history = c.events().dump();
        assert!(history.contains("mount: renderer ready"), "{history}");
        assert!(history.lines().last().is_some_and(|l| l.contains("failure: ")));

        take(&c);
        c.frame();
        assert_eq!(
            take(&c),
            vec![Call::Draw(0), Call::RequestFrame(FrameHandle(2))]
        );
    }

    #[test]
    fn upload_failure_counts_as_texture_failure() {
        let mut c = controller();
        c.attach();
        let mut backend = c.host().backend();
        backend.fail_install = true;
        c.backend_ready(T1, Ok(backend));
        take(&c);

        assert!(c.textures_loaded(T1, Ok(textures())));
        assert_eq!(
            take(&c),
            vec![Call::Report(HeroStatus::Failed(
                "failed to render scene".to_string()
            ))]
        );
        assert!(c.session().is_some_and(|s| !s.scene.has_globe()));
    }

    #[test]
    fn teardown_after_texture_failure_releases_everything() {
        let mut c = mounted();
        let err = TextureLoadError::decode(TextureSlot::Color, "/textures/earth_daymap.jpg", "bad");
        c.textures_loaded(T1, Err(err));
        take(&c);

        assert!(c.detach());
        assert_eq!(
            take(&c),
            vec![
                Call::Unsubscribe(Signal::Resize),
                Call::Unsubscribe(Signal::Scroll),
                Call::CancelFrame(FrameHandle(1)),
                Call::Dispose,
            ]
        );
        assert!(matches!(c.phase(), MountPhase::Unmounted));
        assert_eq!(c.events().count(EventKind::Teardown), 1);
    }

    #[test]
    fn late_textures_after_detach_do_not_mutate() {
        let mut c = mounted();
        c.detach();
        take(&c);

        assert!(!c.textures_loaded(T1, Ok(textures())));
        assert!(take(&c).is_empty());
        assert_eq!(c.status(), &HeroStatus::Loading);
        assert!(c.session().is_none());
        assert!(!c.frame());
        assert!(!c.scrolled());
    }

    #[test]
    fn second_texture_completion_is_ignored() {
        let mut c = mounted();
        c.textures_loaded(T1, Ok(textures()));
        take(&c);

        assert!(!c.textures_loaded(T1, Ok(textures())));
        assert!(take(&c).is_empty());
    }

    #[test]
    fn late_backend_after_detach_is_disposed() {
        let mut c = controller();
        c.attach();
        assert!(c.detach());
        take(&c);

        let backend = c.host().backend();
        assert!(!c.backend_ready(T1, Ok(backend)));
        assert_eq!(take(&c), vec![Call::Dispose]);
        assert!(matches!(c.phase(), MountPhase::Unmounted));
        assert!(!c.attach());
    }

    #[test]
    fn backend_failure_reports_without_listeners() {
        let mut c = controller();
        c.attach();
        take(&c);

        assert!(!c.backend_ready(T1, Err(HeroError::init("no webgl2 context"))));
        assert_eq!(
            take(&c),
            vec![Call::Report(HeroStatus::Failed(
                "failed to initialize scene".to_string()
            ))]
        );
        assert!(matches!(c.phase(), MountPhase::Unmounted));
        assert_eq!(c.events().count(EventKind::Failure), 1);
        assert!(!c.detach());
    }

    #[test]
    fn listener_failure_unwinds_partial_state() {
        let mut c = controller();
        c.host_mut().refuse = Some(Signal::Scroll);
        c.attach();
        take(&c);

        let backend = c.host().backend();
        assert!(!c.backend_ready(T1, Ok(backend)));
        assert_eq!(
            take(&c),
            vec![
                Call::Resize(size()),
                Call::Subscribe(Signal::Resize),
                Call::Unsubscribe(Signal::Resize),
                Call::Dispose,
                Call::Report(HeroStatus::Failed(
                    "failed to initialize scene".to_string()
                )),
            ]
        );
        assert!(matches!(c.phase(), MountPhase::Unmounted));
    }

    #[test]
    fn resize_is_exact_and_idempotent() {
        let mut c = mounted();
        let wide = SurfaceSize::new(1200, 400).with_pixel_ratio(3.0);
        c.host_mut().surface = Some(wide);

        assert!(c.resized());
        let capped = wide.with_pixel_ratio(2.0);
        assert_eq!(take(&c), vec![Call::Resize(capped)]);
        let session = c.session().expect("session");
        assert_eq!(session.camera.aspect, 3.0);
        assert_eq!(session.surface, capped);

        assert!(!c.resized());
        assert!(take(&c).is_empty());
        assert_eq!(c.session().map(|s| s.camera.aspect), Some(3.0));
    }

    #[test]
    fn resize_while_mounting_sizes_the_new_session() {
        let mut c = controller();
        c.attach();
        c.host_mut().surface = Some(SurfaceSize::new(1000, 500));
        assert!(c.resized());

        let backend = c.host().backend();
        c.backend_ready(T1, Ok(backend));
        assert_eq!(c.session().map(|s| s.camera.aspect), Some(2.0));
    }

    #[test]
    fn scroll_before_globe_only_tracks_progress() {
        let mut c = mounted();
        c.host_mut().scroll.offset = offset_for(0.5);

        assert!(c.scrolled());
        let session = c.session().expect("session");
        assert!((session.progress - 0.5).abs() < 1e-9);
        assert_eq!(session.camera.position.z, 8.0);
        assert_eq!(session.camera.position.y, 0.0);
        assert_eq!(take(&c), vec![Call::RevealOverlay(true)]);
    }

    #[test]
    fn scroll_position_is_reapplied_after_load() {
        let mut c = mounted();
        c.host_mut().scroll.offset = offset_for(0.8);
        c.textures_loaded(T1, Ok(textures()));

        let globe = c.session().and_then(|s| s.scene.globe()).expect("globe");
        assert!(!globe.visible);
        assert!(globe.planet.material.is_transparent());
        assert!((c.scroll_progress() - 0.8).abs() < 1e-9);
    }

    #[test]
    fn approach_scroll_moves_camera() {
        let mut c = mounted();
        c.textures_loaded(T1, Ok(textures()));
        c.host_mut().scroll.offset = offset_for(0.2);
        c.scrolled();

        let session = c.session().expect("session");
        assert!((session.camera.position.z - 7.4).abs() < 1e-9);
        assert!((session.camera.position.y - 0.4).abs() < 1e-9);
    }

    #[test]
    fn overlay_toggles_only_on_change() {
        let mut c = mounted();
        c.host_mut().scroll.offset = 400.0;
        c.scrolled();
        c.scrolled();
        c.host_mut().scroll.offset = 100.0;
        c.scrolled();
        assert_eq!(
            take(&c),
            vec![Call::RevealOverlay(true), Call::RevealOverlay(false)]
        );
    }

    #[test]
    fn hidden_globe_draws_nothing() {
        let mut c = mounted();
        c.textures_loaded(T1, Ok(textures()));
        c.host_mut().scroll.offset = offset_for(1.0);
        c.scrolled();
        take(&c);

        c.frame();
        let drawn: Vec<_> = take(&c)
            .into_iter()
            .filter(|call| matches!(call, Call::Draw(_)))
            .collect();
        assert_eq!(drawn, vec![Call::Draw(0)]);
    }

    #[test]
    fn each_mount_cycle_hands_back_its_backend() {
        for _ in 0..3 {
            let mut c = mounted();
            c.textures_loaded(T1, Ok(textures()));
            c.frame();
            take(&c);

            assert!(c.detach());
            let disposed = take(&c)
                .into_iter()
                .filter(|call| *call == Call::Dispose)
                .count();
            assert_eq!(disposed, 1);
            assert!(c.session().is_none());
        }
    }
}
